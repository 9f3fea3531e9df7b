pub mod body;
pub mod macros;
pub mod scenario;
pub mod supplement;

pub use body::{ActivityLevel, BodyCompositionInput, BodyCompositionResult, Gender};
pub use macros::{MacroInput, MacroResult, MacroSplit};
pub use scenario::ScenarioRecommendation;
pub use supplement::{BestTiming, SupplementRecord, TimeSlot};
