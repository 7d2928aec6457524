// Parkvoice Core Library
// National Park Service data client, dialog selection and quiz state for a voice skill

pub mod dialog;
pub mod intent;
pub mod nps;
pub mod skill;
pub mod states;
pub mod text;
pub mod tools;

// Export core types
pub use dialog::{DialogCatalog, DialogData, DialogId, Reply};
pub use intent::{Intent, IntentParser};
pub use nps::{
    HttpParkSource, NpsClient, NpsConfig, NpsError, Park, ParkLocation, ParkQuery, ParkResponse,
    ParkSource, QuizQuestion,
};
pub use skill::{ParkSkill, QuizState};
pub use tools::{Tool, ToolError, ToolRegistry, ToolResult};
