use futures::future::LocalBoxFuture;

use crate::command::BackendCommand;
use crate::error::CommandError;
use crate::types::Ack;

/// Reply to a single backend invocation
pub type CommandFuture = LocalBoxFuture<'static, Result<Ack, CommandError>>;

/// Native backend - executes commands on behalf of the shell
pub trait Backend {
    /// Issue `command`. The request is sent by the time this returns; the
    /// future only waits for the reply.
    fn invoke(&self, command: BackendCommand) -> CommandFuture;
}
