pub use super::admin::Entity as Admin;
pub use super::education::Entity as Education;
pub use super::faq::Entity as Faq;
pub use super::innovation::Entity as Innovation;
pub use super::media_item::Entity as MediaItem;
pub use super::news::Entity as News;
pub use super::project::Entity as Project;
pub use super::research::Entity as Research;
pub use super::sponsor::Entity as Sponsor;
pub use super::team_member::Entity as TeamMember;
pub use super::treatment::Entity as Treatment;
