pub mod seed_directory;

pub use seed_directory::{SeedDirectoryUseCase, SeedOutcome};
