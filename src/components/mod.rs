mod about;
mod avatar;
#[cfg(all(test, target_arch = "wasm32", feature = "hydrate"))]
mod browser;
mod certificate_grid;
mod contact;
mod experience_item;
mod filter_bar;
mod header;
mod hero;
mod icons;
mod image_modal;
mod project_card;
mod project_grid;
mod role_rotator;
mod skill_row;
mod theme_toggle;

pub use about::About;
pub use avatar::Avatar;
pub use certificate_grid::CertificateGrid;
pub use contact::Contact;
pub use experience_item::ExperienceItem;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use hero::Hero;
pub use image_modal::ImageModal;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use role_rotator::{RoleCycle, RoleRotator};
pub use skill_row::{SkillGroup, SkillRow};
pub use theme_toggle::ThemeToggle;
