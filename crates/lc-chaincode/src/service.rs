//! # Chaincode Service
//!
//! The dispatcher. Routes host invocations to the record, index and raw
//! key/value handlers.
//!
//! - Function names are parsed into `InvokeFunction` / `QueryFunction`
//!   before anything else; unknown names never reach state
//! - Arity is checked before any state access
//! - No state is kept between invocations; every call starts from a cold
//!   read of the accessor
//!
//! ## Partial failure in `create`
//!
//! `create` writes the record, then the index. There is no rollback: if the
//! index write fails the record stays, unreferenced by the index, and the
//! invocation fails. Hosts that discard failed invocations' writes never
//! observe this; hosts that apply writes eagerly do.

use crate::adapters::InMemoryState;
use crate::config::ChaincodeConfig;
use crate::domain::entities::LetterOfCredit;
use crate::domain::invariants::{check_arity, check_not_reserved};
use crate::domain::services::{decode_record, encode_record};
use crate::domain::value_objects::{EntryPoint, InvokeFunction, QueryFunction};
use crate::errors::ChaincodeError;
use crate::events::{InvocationRequestPayload, InvocationResponsePayload};
use crate::index::IndexManager;
use crate::ports::inbound::ChaincodeApi;
use crate::ports::outbound::StateAccess;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The letter-of-credit chaincode.
pub struct ChaincodeService<S: StateAccess> {
    /// Service configuration.
    config: ChaincodeConfig,
    /// Host state accessor.
    state: Arc<S>,
}

impl<S: StateAccess> ChaincodeService<S> {
    /// Create a new chaincode service.
    pub fn new(state: S, config: ChaincodeConfig) -> Self {
        Self::with_shared_state(Arc::new(state), config)
    }

    /// Create a service over a state accessor shared with the caller.
    pub fn with_shared_state(state: Arc<S>, config: ChaincodeConfig) -> Self {
        Self { config, state }
    }

    /// Service configuration.
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// The underlying state accessor.
    pub fn state(&self) -> &S {
        &self.state
    }

    fn index(&self) -> IndexManager<'_, S> {
        IndexManager::new(&*self.state, &self.config.index_key)
    }

    fn guard(&self, key: &str) -> Result<(), ChaincodeError> {
        if self.config.guard_reserved_keys {
            check_not_reserved(key, &self.config.index_key)?;
        }
        Ok(())
    }

    // =========================================================================
    // HANDLERS
    // =========================================================================

    /// Seed the index with the single argument, verbatim.
    ///
    /// # Errors
    ///
    /// `Arity` unless exactly one argument; `Storage` if the put fails.
    pub async fn initialize(&self, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        check_arity(InvokeFunction::Init.name(), InvokeFunction::Init.arity(), args)?;
        self.index().seed(&args[0]).await?;
        info!(index_key = %self.config.index_key, "Index initialized");
        Ok(Vec::new())
    }

    /// Store a key/value pair verbatim. Does not touch the index.
    ///
    /// # Errors
    ///
    /// `Arity` unless exactly two arguments; `ReservedKey` if guarded and the
    /// key is the index key; `Storage` if the put fails.
    pub async fn write(&self, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        check_arity(InvokeFunction::Write.name(), InvokeFunction::Write.arity(), args)?;
        let (key, value) = (&args[0], &args[1]);
        self.guard(key)?;

        self.state.put_state(key, value.as_bytes().to_vec()).await?;
        debug!(key = %key, len = value.len(), "Value written");
        Ok(Vec::new())
    }

    /// Decode a letter of credit, store it under its id and append the id
    /// to the index.
    ///
    /// # Errors
    ///
    /// `Arity` unless exactly one argument; `Decode` for a malformed payload;
    /// `ReservedKey` if guarded and the id is the index key; `Encode` if
    /// re-encoding fails; `Storage` if any get/put fails.
    pub async fn create(&self, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        check_arity(InvokeFunction::Create.name(), InvokeFunction::Create.arity(), args)?;

        let record = decode_record(args[0].as_bytes())?;
        self.guard(record.state_key())?;
        let bytes = encode_record(&record)?;

        self.state.put_state(record.state_key(), bytes).await?;

        let index = self.index();
        if let Err(e) = index.append(&record.id).await {
            debug!(id = %record.id, index_key = %index.key(), "L/C stored but not indexed");
            return Err(e);
        }

        info!(id = %record.id, bank = %record.bank, "L/C created");
        Ok(Vec::new())
    }

    /// Return the raw bytes stored under the single argument.
    ///
    /// # Errors
    ///
    /// `Arity` unless exactly one argument; `NotFoundOrStorage` if the get
    /// fails or the key is absent.
    pub async fn read(&self, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        check_arity(QueryFunction::Read.name(), QueryFunction::Read.arity(), args)?;
        let key = &args[0];

        match self.state.get_state(key).await {
            Ok(Some(bytes)) => Ok(bytes),
            Ok(None) => Err(ChaincodeError::NotFoundOrStorage { key: key.clone() }),
            Err(e) => {
                debug!(key = %key, error = %e, "State read failed");
                Err(ChaincodeError::NotFoundOrStorage { key: key.clone() })
            }
        }
    }

    // =========================================================================
    // LIBRARY HELPERS
    // =========================================================================

    /// Ids in the index, in creation order.
    ///
    /// # Errors
    ///
    /// `Storage` if the index cannot be read.
    pub async fn list_records(&self) -> Result<Vec<String>, ChaincodeError> {
        Ok(self.index().load().await?.into_ids())
    }

    /// Fetch and decode the record stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFoundOrStorage` if absent or unreadable; `Decode` if the stored
    /// value is not a letter of credit.
    pub async fn get_record(&self, id: &str) -> Result<LetterOfCredit, ChaincodeError> {
        let bytes = self.read(&[id.to_string()]).await?;
        decode_record(&bytes)
    }

    /// Drive one entry point from a host envelope.
    #[instrument(skip(self, request), fields(correlation_id = %request.correlation_id, entry_point = %request.entry_point))]
    pub async fn handle_invocation(
        &self,
        request: InvocationRequestPayload,
    ) -> InvocationResponsePayload {
        let result = match request.entry_point {
            EntryPoint::Init => self.init(&request.function, &request.args).await,
            EntryPoint::Invoke => self.invoke(&request.function, &request.args).await,
            EntryPoint::Query => self.query(&request.function, &request.args).await,
        };
        InvocationResponsePayload::from_result(request.correlation_id, result)
    }
}

/// Create a default service with in-memory state (for testing).
#[must_use]
pub fn create_test_service() -> ChaincodeService<InMemoryState> {
    ChaincodeService::new(InMemoryState::new(), ChaincodeConfig::default())
}

// The single log line for a failed invocation.
fn log_outcome(entry_point: EntryPoint, function: &str, result: &Result<Vec<u8>, ChaincodeError>) {
    match result {
        Ok(bytes) => debug!(%entry_point, function, result_len = bytes.len(), "Invocation succeeded"),
        Err(e) => warn!(
            %entry_point,
            function,
            rejected = e.is_rejection(),
            writes_discarded = entry_point.is_mutating() && !e.is_rejection(),
            error = %e,
            "Invocation failed"
        ),
    }
}

// =============================================================================
// ChaincodeApi Implementation
// =============================================================================

#[async_trait]
impl<S: StateAccess> ChaincodeApi for ChaincodeService<S> {
    #[instrument(skip(self, args), fields(argc = args.len()))]
    async fn init(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        let result = self.initialize(args).await;
        log_outcome(EntryPoint::Init, function, &result);
        result
    }

    #[instrument(skip(self, args), fields(argc = args.len()))]
    async fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "Invoke is running");

        let result = match InvokeFunction::parse(function) {
            Some(InvokeFunction::Init) => self.initialize(args).await,
            Some(InvokeFunction::Write) => self.write(args).await,
            Some(InvokeFunction::Create) => self.create(args).await,
            None => Err(ChaincodeError::UnknownFunction {
                entry_point: EntryPoint::Invoke,
                function: function.to_string(),
            }),
        };
        log_outcome(EntryPoint::Invoke, function, &result);
        result
    }

    #[instrument(skip(self, args), fields(argc = args.len()))]
    async fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        debug!(function, "Query is running");

        let result = match QueryFunction::parse(function) {
            Some(QueryFunction::Read) => self.read(args).await,
            None => Err(ChaincodeError::UnknownFunction {
                entry_point: EntryPoint::Query,
                function: function.to_string(),
            }),
        };
        log_outcome(EntryPoint::Query, function, &result);
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
