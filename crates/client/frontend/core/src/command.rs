//! Store commands issued by page controllers and their replies.
//!
//! A [`Request`] pairs a [`Command`] with the [`Ticket`] it was issued under.
//! Frontends execute it with [`dispatch`] wherever they like (inline, on a
//! spawned task) and hand the [`Response`] back to the controller, which
//! drops it if the ticket is stale.

use client_store_core::{FighterStore, StoreError};
use roster_core::{Fighter, FighterId, FighterPatch, NewFighter};

/// Navigation epoch plus issue order of one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket {
    epoch: u64,
    sequence: u64,
}

impl Ticket {
    pub const fn new(epoch: u64, sequence: u64) -> Self {
        Self { epoch, sequence }
    }

    /// Page visit the request belongs to.
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// One store round trip.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    List,
    Get(FighterId),
    Create(NewFighter),
    Update { id: FighterId, patch: FighterPatch },
    Delete(FighterId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Get(_) => "get",
            Command::Create(_) => "create",
            Command::Update { .. } => "update",
            Command::Delete(_) => "delete",
        }
    }
}

/// Outcome of a [`Command`], carrying enough context to apply it locally.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Listed(Result<Vec<Fighter>, StoreError>),
    Fetched(Result<Fighter, StoreError>),
    Created(Result<Fighter, StoreError>),
    Updated {
        id: FighterId,
        patch: FighterPatch,
        result: Result<(), StoreError>,
    },
    Deleted {
        id: FighterId,
        result: Result<(), StoreError>,
    },
}

impl Reply {
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Reply::Listed(result) => result.as_ref().err(),
            Reply::Fetched(result) | Reply::Created(result) => result.as_ref().err(),
            Reply::Updated { result, .. } | Reply::Deleted { result, .. } => {
                result.as_ref().err()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub ticket: Ticket,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub ticket: Ticket,
    pub reply: Reply,
}

impl Response {
    pub fn new(ticket: Ticket, reply: Reply) -> Self {
        Self { ticket, reply }
    }
}

/// Executes one command against `store`.
pub async fn dispatch(store: &dyn FighterStore, command: Command) -> Reply {
    let name = command.name();
    tracing::debug!(backend = store.backend(), command = name, "dispatching");

    let reply = match command {
        Command::List => Reply::Listed(store.list().await),
        Command::Get(id) => Reply::Fetched(store.get(&id).await),
        Command::Create(fighter) => Reply::Created(store.create(fighter).await),
        Command::Update { id, patch } => {
            let result = store.update(&id, patch.clone()).await;
            Reply::Updated { id, patch, result }
        }
        Command::Delete(id) => {
            let result = store.delete(&id).await;
            Reply::Deleted { id, result }
        }
    };

    if let Some(error) = reply.error() {
        tracing::error!(backend = store.backend(), command = name, %error, "store call failed");
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_store_core::{InMemoryFighterStore, TransportError};

    #[tokio::test]
    async fn dispatch_runs_each_command() {
        let store = InMemoryFighterStore::new();

        let Reply::Created(Ok(created)) =
            dispatch(&store, Command::Create(NewFighter::new("Blaze"))).await
        else {
            panic!("create failed");
        };

        let reply = dispatch(
            &store,
            Command::Update {
                id: created.id.clone(),
                patch: FighterPatch::new().with_name("Blaze II"),
            },
        )
        .await;
        assert!(reply.error().is_none());

        let Reply::Fetched(Ok(fetched)) = dispatch(&store, Command::Get(created.id.clone())).await
        else {
            panic!("get failed");
        };
        assert_eq!(fetched.name, "Blaze II");

        let reply = dispatch(&store, Command::Delete(created.id)).await;
        assert!(reply.error().is_none());
        assert_eq!(dispatch(&store, Command::List).await, Reply::Listed(Ok(vec![])));
    }

    #[tokio::test]
    async fn dispatch_surfaces_store_errors() {
        let store = InMemoryFighterStore::new();
        store.fail_next(TransportError::Injected("down".into()));

        let reply = dispatch(&store, Command::List).await;
        assert!(matches!(reply.error(), Some(StoreError::Transport(_))));
    }

    #[test]
    fn tickets_order_by_epoch_then_sequence() {
        assert!(Ticket::new(1, 9) < Ticket::new(2, 0));
        assert!(Ticket::new(2, 0) < Ticket::new(2, 1));
    }
}
