pub mod corruption_detector;
pub mod priority_ranker;
pub mod risk_map_builder;
pub mod trust_scorer;
pub mod zone_aggregator;

pub use corruption_detector::ICorruptionDetector;
pub use priority_ranker::IPriorityRanker;
pub use risk_map_builder::IRiskMapBuilder;
pub use trust_scorer::ITrustScorer;
pub use zone_aggregator::IZoneAggregator;
