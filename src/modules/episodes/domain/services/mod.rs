pub mod episode_merger;

pub use episode_merger::EpisodeMerger;
