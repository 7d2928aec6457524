pub mod parks;

pub use parks::{register_park_tools, DescribeParkTool, LocateParkTool, ParksByStateTool, QuizTool};
