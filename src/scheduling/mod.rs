mod constant;
mod exponential;
mod multiple;
mod scheduler;

pub use constant::ConstantLr;
pub use exponential::ExponentialLr;
pub use multiple::MultipleLrSchedulers;
pub use scheduler::LrScheduler;
