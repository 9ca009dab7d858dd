mod builder;
mod linear_trainer;
mod report;
mod trainer;

pub use builder::TrainerBuilder;
pub use linear_trainer::LinearTrainer;
pub use report::TrainingReport;
pub use trainer::Trainer;
