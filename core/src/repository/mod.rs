pub mod file;
pub mod traits;

pub use file::FileSettingsRepository;
pub use traits::SettingsRepository;
