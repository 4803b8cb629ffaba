mod center;
mod connect_to;
mod rotate;
mod scale;
mod translate;

pub use center::Center;
pub use connect_to::ConnectTo;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;
