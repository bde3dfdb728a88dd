//! Commands whose output is fetched from the network: joke, waifu.

use folio_types::error::Result;

use crate::cells::FetchKind;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register network-backed commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(FetchCmd {
        name: "joke",
        description: "Tell a random joke",
        kind: FetchKind::Joke,
    }));
    reg.register(Box::new(FetchCmd {
        name: "waifu",
        description: "Show a random waifu image",
        kind: FetchKind::Waifu,
    }));
}

/// Mounts a live cell for `kind`.
struct FetchCmd {
    name: &'static str,
    description: &'static str,
    kind: FetchKind,
}

impl Command for FetchCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Async(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn fetch_commands_return_async() {
        let mut reg = CommandRegistry::new();
        register_fun_commands(&mut reg);
        let env = Environment {
            registry: &reg,
            user: "x",
            now: OffsetDateTime::UNIX_EPOCH,
        };
        assert_eq!(
            reg.lookup("joke").unwrap().execute(&env).unwrap(),
            CommandOutput::Async(FetchKind::Joke)
        );
        assert_eq!(
            reg.lookup("waifu").unwrap().execute(&env).unwrap(),
            CommandOutput::Async(FetchKind::Waifu)
        );
    }
}
