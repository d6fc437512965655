pub mod mood_classifier;
pub mod suggestion_presenter;
pub mod temporal_partitioner;
