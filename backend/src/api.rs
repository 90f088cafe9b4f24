//! Public API surface for the backend.
//!
//! This file consolidates the DTO types exchanged over HTTP. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::DeltaKpis;
pub use crate::models::Period;
pub use crate::models::Segment;
pub use crate::models::SiteInfo;
pub use crate::models::SiteKpis;
pub use crate::models::Trend;
pub use crate::routes::kpis::CompareKpisRequest;
pub use crate::routes::kpis::GetKpisRequest;
pub use crate::routes::registry::HttpBinding;
pub use crate::routes::registry::ParameterSchema;
pub use crate::routes::registry::PropertySchema;
pub use crate::routes::registry::ToolFunction;
pub use crate::routes::registry::ToolManifest;
