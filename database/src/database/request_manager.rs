use std::{sync::mpsc::Sender, time::Duration};
use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::{
        action::{Action, ActionResult},
        person::{Person, PersonData},
    },
};

use super::table::table::ApplyErrors;

#[derive(Debug)]
pub enum DatabaseRequestAction {
    Request(Action),
    Shutdown,
}

impl DatabaseRequestAction {
    /// Prints requests in a readable single line format
    pub fn log_format(&self) -> String {
        match self {
            DatabaseRequestAction::Request(action) => format!("{:?}", action),
            DatabaseRequestAction::Shutdown => "Shutdown".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DatabaseResponseAction {
    Response(ActionResult),
    /// The action was not applied, the collection is unchanged
    Rejected(ApplyErrors),
}

pub struct DatabaseRequest {
    pub response_sender: oneshot::Sender<DatabaseResponseAction>,
    pub action: DatabaseRequestAction,
}

#[derive(Error, Debug, PartialEq)]
pub enum RequestManagerError {
    #[error("Database took too long to respond to request")]
    DatabaseTimeout,
    #[error("Database is not running")]
    DatabaseStopped,
    #[error(transparent)]
    Rejected(#[from] ApplyErrors),
    #[error("Database responded with an unexpected result: {0}")]
    UnexpectedResult(String),
}

/// Goal of the request manager is to provide a simple interface for interacting with the database
///
/// Every call is sent to the single database thread, which owns the collection and processes
/// requests one at a time. The request manager is cheap to clone, each HTTP worker holds its own.
#[derive(Clone)]
pub struct RequestManager {
    database_sender: Sender<DatabaseRequest>,
    response_timeout: Duration,
}

impl RequestManager {
    pub fn new(database_sender: Sender<DatabaseRequest>, response_timeout: Duration) -> Self {
        Self {
            database_sender,
            response_timeout,
        }
    }

    pub fn send_list(&self) -> Result<Vec<Person>, RequestManagerError> {
        match self.send_single_action(Action::List)? {
            ActionResult::List(people) => Ok(people),
            other => Err(RequestManagerError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    pub fn send_add(&self, person: PersonData) -> Result<Person, RequestManagerError> {
        single(self.send_single_action(Action::Add(person))?)
    }

    pub fn send_update(
        &self,
        id: PersonId,
        person: PersonData,
    ) -> Result<Person, RequestManagerError> {
        single(self.send_single_action(Action::Update(id, person))?)
    }

    pub fn send_remove(&self, id: PersonId) -> Result<Person, RequestManagerError> {
        single(self.send_single_action(Action::Remove(id))?)
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        match self.send_database_request(DatabaseRequestAction::Shutdown)? {
            ActionResult::SuccessStatus(status) => Ok(status),
            other => Err(RequestManagerError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Sends a single action to the database and returns a single action result
    pub fn send_single_action(&self, action: Action) -> Result<ActionResult, RequestManagerError> {
        self.send_database_request(DatabaseRequestAction::Request(action))
    }

    pub fn send_database_request(
        &self,
        database_request: DatabaseRequestAction,
    ) -> Result<ActionResult, RequestManagerError> {
        let (response_sender, response_receiver) = oneshot::channel::<DatabaseResponseAction>();

        let request = DatabaseRequest {
            response_sender,
            action: database_request,
        };

        // Sends the request to the database worker, database will respond
        //  on the response_receiver once it's finished processing the request
        self.database_sender
            .send(request)
            .map_err(|_| RequestManagerError::DatabaseStopped)?;

        match response_receiver.recv_timeout(self.response_timeout) {
            Ok(DatabaseResponseAction::Response(action_result)) => Ok(action_result),
            Ok(DatabaseResponseAction::Rejected(err)) => Err(RequestManagerError::Rejected(err)),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::DatabaseTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => {
                Err(RequestManagerError::DatabaseStopped)
            }
        }
    }
}

fn single(action_result: ActionResult) -> Result<Person, RequestManagerError> {
    match action_result {
        ActionResult::Single(person) => Ok(person),
        other => Err(RequestManagerError::UnexpectedResult(format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn times_out_when_database_does_not_respond() {
        // Given a database channel that nobody reads from
        let (sender, _receiver) = mpsc::channel::<DatabaseRequest>();

        let request_manager = RequestManager::new(sender, Duration::from_millis(10));

        // Then the request gives up after the timeout
        assert_eq!(
            request_manager.send_list(),
            Err(RequestManagerError::DatabaseTimeout)
        );
    }

    #[test]
    fn reports_stopped_database_when_channel_is_closed() {
        let (sender, receiver) = mpsc::channel::<DatabaseRequest>();

        drop(receiver);

        let request_manager = RequestManager::new(sender, Duration::from_millis(10));

        assert_eq!(
            request_manager.send_remove(PersonId(1)),
            Err(RequestManagerError::DatabaseStopped)
        );
    }

    #[test]
    fn rejected_actions_surface_the_apply_error() {
        let (sender, receiver) = mpsc::channel::<DatabaseRequest>();

        let request_manager = RequestManager::new(sender, Duration::from_secs(1));

        let responder = std::thread::spawn(move || {
            let DatabaseRequest {
                response_sender, ..
            } = receiver.recv().expect("should receive request");

            response_sender
                .send(DatabaseResponseAction::Rejected(
                    ApplyErrors::PersonAlreadyExists,
                ))
                .expect("requester should be waiting");
        });

        let result = request_manager.send_add(PersonData::new("Lewis", "Hamilton"));

        responder.join().expect("responder should not panic");

        assert_eq!(
            result,
            Err(RequestManagerError::Rejected(ApplyErrors::PersonAlreadyExists))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "The person is already in the list!"
        );
    }
}
