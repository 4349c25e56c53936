pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod shell;
pub mod skills;

pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use shell::Shell;
pub use skills::SkillsSection;
