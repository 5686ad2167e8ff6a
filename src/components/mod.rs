pub mod animation;
pub mod footer;
pub mod hero;
pub mod reveal;
pub mod skill_card;
pub mod social_links;
pub mod timeline;
