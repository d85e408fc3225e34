use std::rc::Rc;

use crate::app::domain::{Command, CoreInbound};
use crate::app::services::core_process::CorePort;

/// Forwards commands from every menu surface to the application core.
///
/// No precondition checks happen here; menus that would produce a forbidden
/// command are disabled or hidden upstream.
pub struct CommandRouter {
    core: Rc<dyn CorePort>,
}

impl CommandRouter {
    pub fn new(core: Rc<dyn CorePort>) -> Self {
        Self { core }
    }

    pub fn dispatch(&self, command: Command) {
        tracing::debug!(?command, "dispatch");
        self.core.send(CoreInbound::MenuCommand(command));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::testing::RecordingCore;

    #[test]
    fn test_dispatch_sends_exactly_one_message() {
        let core = Rc::new(RecordingCore::default());
        let router = CommandRouter::new(core.clone());

        router.dispatch(Command::MoveUp);

        assert_eq!(core.sent(), vec![CoreInbound::MenuCommand(Command::MoveUp)]);
    }

    #[test]
    fn test_dispatch_forwards_every_command_unchanged() {
        let core = Rc::new(RecordingCore::default());
        let router = CommandRouter::new(core.clone());

        for command in Command::all() {
            router.dispatch(*command);
        }

        let expected: Vec<CoreInbound> = Command::all().iter().map(|c| CoreInbound::MenuCommand(*c)).collect();
        assert_eq!(core.sent(), expected);
    }
}
