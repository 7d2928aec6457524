use parkvoice_core::intent::normalize;
use parkvoice_core::{DialogCatalog, Intent, IntentParser, ParkSkill, ToolRegistry};
use tracing::{debug, info, warn};

/// What the host loop should do after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Speak (print) this text
    Say(String),
    /// Re-read configuration and push the new API key to the skill
    Reload,
    Quit,
    Nothing,
}

/// One conversation: routes typed lines to the skill or to host commands
pub struct Session {
    skill: ParkSkill,
    parser: IntentParser,
    catalog: DialogCatalog,
    registry: ToolRegistry,
}

const HELP: &str = "Try: \"list the national parks in utah\", \"describe yellowstone national park\", \
\"where is death valley national park\", \"quiz me\", \"repeat the question\". \
Commands: :tools, :tool <name> <json>, :reload, :quit";

impl Session {
    pub fn new(skill: ParkSkill, catalog: DialogCatalog, registry: ToolRegistry) -> Self {
        Self {
            skill,
            parser: IntentParser::new(),
            catalog,
            registry,
        }
    }

    pub fn skill(&self) -> &ParkSkill {
        &self.skill
    }

    pub fn set_catalog(&mut self, catalog: DialogCatalog) {
        self.catalog = catalog;
    }

    pub async fn respond(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Nothing;
        }
        if let Some(command) = line.strip_prefix(':') {
            return self.command(command).await;
        }

        let intent = if self.skill.awaiting_answer() {
            Intent::AnswerQuiz {
                utterance: normalize(line),
            }
        } else {
            match self.parser.parse(line) {
                Some(intent) => intent,
                None => {
                    debug!(target: "park_agent", utterance = %line, "No intent matched");
                    return LineOutcome::Say(HELP.to_string());
                }
            }
        };

        info!(target: "park_agent", intent = intent.name(), "Intent matched");
        let reply = self.skill.handle(intent).await;
        LineOutcome::Say(self.catalog.render(&reply))
    }

    async fn command(&self, command: &str) -> LineOutcome {
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(n, r)| (n, r.trim()))
            .unwrap_or((command, ""));

        match name {
            "quit" | "q" | "exit" => LineOutcome::Quit,
            "reload" => LineOutcome::Reload,
            "help" => LineOutcome::Say(HELP.to_string()),
            "tools" => LineOutcome::Say(self.registry.names().join("\n")),
            "tool" => LineOutcome::Say(self.call_tool(rest).await),
            other => LineOutcome::Say(format!("Unknown command :{}", other)),
        }
    }

    async fn call_tool(&self, rest: &str) -> String {
        let (tool, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, "{}"));
        if tool.is_empty() {
            return "Usage: :tool <name> <json>".to_string();
        }

        let arguments = match serde_json::from_str::<serde_json::Value>(args.trim()) {
            Ok(v) => v,
            Err(e) => return format!("Invalid JSON arguments: {}", e),
        };

        match self.registry.call(tool, arguments).await {
            Ok(out) => serde_json::to_string_pretty(&out).unwrap_or_else(|_| out.to_string()),
            Err(e) => {
                warn!(target: "park_agent", tool = %tool, error = %e, "Tool call failed");
                format!("Tool error: {}", e)
            }
        }
    }
}
