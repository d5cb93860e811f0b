pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::group_member::Entity as GroupMember;
pub use super::lesson::Entity as Lesson;
pub use super::progress::Entity as Progress;
pub use super::study_group::Entity as StudyGroup;
pub use super::user::Entity as User;
