//! Repository layer for writing posts and tags

pub mod post_repo;

pub use post_repo::PostRepo;
