mod carousel;
mod clocks;
mod orbit;
mod particles;
mod radar;
mod social;
mod stats;

pub use carousel::ProjectImageCarousel;
pub use clocks::{ResponseTimeIndicator, WorldClock};
pub use orbit::TechStackOrbit;
pub use particles::{FloatingParticles, ParticleBackground};
pub use radar::SkillsRadar;
pub use social::SocialLinks;
pub use stats::LiveStats;
