//! Concrete implementations of the collaborator traits.

pub mod cached_repo;
pub mod dto;
pub mod fixture_api;
pub mod player_roster;
pub mod remote_api;

pub use cached_repo::CachedGameRepository;
pub use fixture_api::{Fixture, FixtureGameApi};
pub use player_roster::PlayerRoster;
pub use remote_api::{GameApi, HttpGameApi};
