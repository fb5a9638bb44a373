use std::{
    sync::mpsc::{self, Receiver},
    thread,
};

use crate::{
    database::request_manager::{DatabaseRequestAction, DatabaseResponseAction},
    model::action::{Action, ActionResult},
};

use super::{
    options::DatabaseOptions,
    request_manager::{DatabaseRequest, RequestManager},
    table::table::PersonTable,
};

/// Owns the person table. Runs on its own thread and handles one request at a time, callers
/// talk to it through a `RequestManager`.
pub struct Database {
    person_table: PersonTable,
    database_options: DatabaseOptions,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        Self {
            person_table: PersonTable::from_people(options.seed.clone()),
            database_options: options,
        }
    }

    /// Starts the database thread, the returned request manager can be cloned for each caller
    pub fn run(self) -> RequestManager {
        let (database_sender, database_receiver) = mpsc::channel::<DatabaseRequest>();

        let response_timeout = self.database_options.response_timeout;

        thread::spawn(move || self.process_requests(database_receiver));

        RequestManager::new(database_sender, response_timeout)
    }

    fn process_requests(mut self, database_receiver: Receiver<DatabaseRequest>) {
        log::info!(
            "📀 Database started [Rows: {}, NextId: {}]",
            self.person_table.len(),
            self.person_table.next_id()
        );

        // Loop ends once every request manager has been dropped
        while let Ok(DatabaseRequest {
            action,
            response_sender,
        }) = database_receiver.recv()
        {
            log::info!("Received request: {}", action.log_format());

            let action = match action {
                DatabaseRequestAction::Request(action) => action,
                DatabaseRequestAction::Shutdown => {
                    let _ = response_sender.send(DatabaseResponseAction::Response(
                        ActionResult::SuccessStatus("Successfully shutdown database".to_string()),
                    ));

                    return;
                }
            };

            let action_response = self.process_action(action);

            // Sends the response back to the caller, it may have timed out and gone away already
            if response_sender.send(action_response).is_err() {
                log::warn!("Requester dropped before the response could be sent");
            }
        }

        log::info!("All request managers dropped, stopping database");
    }

    pub fn process_action(&mut self, action: Action) -> DatabaseResponseAction {
        let is_mutation = action.is_mutation();

        match self.person_table.apply(action) {
            Ok(action_result) => {
                if is_mutation {
                    log::debug!("People: {:?}", self.person_table.people());
                }

                DatabaseResponseAction::Response(action_result)
            }
            Err(err) => {
                log::warn!("Rejected request: {}", err);

                DatabaseResponseAction::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
impl Database {
    pub fn new_test() -> Self {
        Database::new(DatabaseOptions::new_test())
    }
}
