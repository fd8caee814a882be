//! Price Oracle Service - Core business logic
//!
//! # Architecture
//! - One `parking_lot::RwLock` over registry, ledger and metadata
//! - Validation completes before any mutation
//! - Notifications are published under the lock, in state order
//! - No await points inside an operation

use crate::adapters::{NoopEventSink, OwnerPolicy, SystemClock};
use crate::domain::{
    evaluate, AdmissionOutcome, BuildError, OracleConfig, OracleError, OracleResult, Round,
    RoundIndex, RoundLedger, TrustRegistry,
};
use crate::events::OracleEvent;
use crate::metrics;
use crate::ports::{
    AccessPolicy, Clock, LatestRoundData, OracleAdminApi, OracleEventSink, PriceFeedApi,
    ReportSubmissionApi, SignerRecovery,
};
use oracle_signature::EcdsaRecoverer;
use parking_lot::RwLock;
use primitive_types::U256;
use shared_types::{Address, I256};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, info_span, warn};


/// Interface version reported by `version()`
pub const ORACLE_VERSION: u64 = 1;

/// State guarded by the oracle lock
#[derive(Debug, Default)]
struct OracleState {
    registry: TrustRegistry,
    ledger: RoundLedger,
    description: String,
    decimals: u8,
}

/// Push-style price oracle
pub struct PriceOracle {
    state: RwLock<OracleState>,
    config: OracleConfig,
    recoverer: Arc<dyn SignerRecovery>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn OracleEventSink>,
    access: Arc<dyn AccessPolicy>,
}

impl std::fmt::Debug for PriceOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceOracle")
            .field("state", &*self.state.read())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PriceOracle {
    /// Start building an oracle administered by `owner`
    pub fn builder(owner: Address) -> OracleBuilder {
        OracleBuilder::new(owner)
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn authorize(&self, caller: &Address) -> OracleResult<()> {
        if self.access.is_authorized(caller) {
            Ok(())
        } else {
            warn!(%caller, "unauthorized admin call");
            Err(OracleError::Unauthorized(*caller))
        }
    }

    fn add_reporter_locked(&self, state: &mut OracleState, reporter: Address) -> OracleResult<()> {
        state.registry.add(reporter)?;
        info!(%reporter, trusted = state.registry.count(), "reporter added");
        self.events.publish(OracleEvent::ReporterAdded { reporter });
        Ok(())
    }

    fn try_admit(
        &self,
        submitter: Address,
        report: &[u8],
        signatures: &[Vec<u8>],
    ) -> OracleResult<AdmissionOutcome> {
        let mut state = self.state.write();
        let now = self.clock.now();

        let admission = evaluate(
            report,
            signatures,
            &state.registry,
            &state.ledger,
            self.recoverer.as_ref(),
            &self.config,
            now,
        )?;

        let accepted_block_height = self.clock.block_height();
        let signature_count = admission.signers.len();
        let round = Round::from_report(
            &admission.report,
            accepted_block_height,
            now,
            signature_count,
        );
        let round_index = state.ledger.append(round)?;

        info!(
            round_index,
            price = %round.price,
            observed_timestamp = %round.observed_timestamp,
            signers = signature_count,
            required = admission.required,
            skipped = admission.skipped.len(),
            "round accepted"
        );

        self.events.publish(OracleEvent::RoundAccepted {
            round_index,
            price: round.price,
            report_round_id: round.report_round_id,
            observed_timestamp: round.observed_timestamp,
            accepted_timestamp: now,
            accepted_block_height,
            signature_count,
            submitter,
        });

        Ok(AdmissionOutcome {
            round_index,
            signer_count: signature_count,
            required: admission.required,
            skipped: admission.skipped,
        })
    }
}

impl ReportSubmissionApi for PriceOracle {
    fn admit_detailed(
        &self,
        submitter: Address,
        report: &[u8],
        signatures: &[Vec<u8>],
    ) -> OracleResult<AdmissionOutcome> {
        let span = info_span!("admit", %submitter, signatures = signatures.len());
        let _enter = span.enter();
        let started = Instant::now();

        let result = self.try_admit(submitter, report, signatures);

        metrics::record_admission_latency(started.elapsed().as_secs_f64());
        match &result {
            Ok(outcome) => metrics::record_round_accepted(outcome.signer_count),
            Err(e) => {
                warn!(reason = e.reason(), error = %e, "report rejected");
                metrics::record_report_rejected(e.reason());
            }
        }
        result
    }
}

impl PriceFeedApi for PriceOracle {
    fn is_trusted(&self, reporter: &Address) -> bool {
        self.state.read().registry.is_trusted(reporter)
    }

    fn trusted_reporters(&self) -> Vec<Address> {
        self.state.read().registry.enumerate().to_vec()
    }

    fn trusted_count(&self) -> usize {
        self.state.read().registry.count()
    }

    fn required_signatures(&self) -> usize {
        let count = self.state.read().registry.count();
        self.config.threshold.required_signatures(count)
    }

    fn round(&self, index: RoundIndex) -> OracleResult<Round> {
        self.state.read().ledger.get(index).copied()
    }

    fn latest_price(&self) -> I256 {
        self.state.read().ledger.latest().price
    }

    fn latest_timestamp(&self) -> U256 {
        self.state.read().ledger.latest().observed_timestamp
    }

    fn latest_round_index(&self) -> RoundIndex {
        self.state.read().ledger.latest_index()
    }

    fn latest_round_data(&self) -> LatestRoundData {
        let state = self.state.read();
        let round_index = state.ledger.latest_index();
        let latest = state.ledger.latest();
        LatestRoundData {
            round_index,
            price: latest.price,
            observed_timestamp: latest.observed_timestamp,
            accepted_timestamp: latest.accepted_timestamp,
            answered_in_round: round_index,
        }
    }

    fn description(&self) -> String {
        self.state.read().description.clone()
    }

    fn decimals(&self) -> u8 {
        self.state.read().decimals
    }

    fn version(&self) -> u64 {
        ORACLE_VERSION
    }
}

impl OracleAdminApi for PriceOracle {
    fn add_trusted_reporter(&self, caller: Address, reporter: Address) -> OracleResult<()> {
        self.authorize(&caller)?;
        let mut state = self.state.write();
        self.add_reporter_locked(&mut state, reporter)
    }

    fn remove_trusted_reporter(&self, caller: Address, reporter: Address) -> OracleResult<()> {
        self.authorize(&caller)?;
        let mut state = self.state.write();
        state.registry.remove(&reporter)?;
        info!(%reporter, trusted = state.registry.count(), "reporter removed");
        self.events.publish(OracleEvent::ReporterRemoved { reporter });
        Ok(())
    }

    fn set_description(&self, caller: Address, description: String) -> OracleResult<()> {
        self.authorize(&caller)?;
        let mut state = self.state.write();
        state.description = description.clone();
        info!(%description, "description changed");
        self.events
            .publish(OracleEvent::DescriptionChanged { description });
        Ok(())
    }

    fn set_decimals(&self, caller: Address, decimals: u8) -> OracleResult<()> {
        self.authorize(&caller)?;
        let mut state = self.state.write();
        state.decimals = decimals;
        info!(decimals, "decimals changed");
        self.events.publish(OracleEvent::DecimalsChanged { decimals });
        Ok(())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Assembles a [`PriceOracle`] from its collaborators.
///
/// Defaults: [`OracleConfig::default`], [`SystemClock`], [`NoopEventSink`],
/// [`EcdsaRecoverer`] and an [`OwnerPolicy`] for the given owner.
pub struct OracleBuilder {
    access: Arc<dyn AccessPolicy>,
    config: OracleConfig,
    clock: Arc<dyn Clock>,
    events: Arc<dyn OracleEventSink>,
    recoverer: Arc<dyn SignerRecovery>,
    reporters: Vec<Address>,
}

impl OracleBuilder {
    pub fn new(owner: Address) -> Self {
        Self {
            access: Arc::new(OwnerPolicy::new(owner)),
            config: OracleConfig::default(),
            clock: Arc::new(SystemClock::default()),
            events: Arc::new(NoopEventSink),
            recoverer: Arc::new(EcdsaRecoverer::new()),
            reporters: Vec::new(),
        }
    }

    pub fn config(mut self, config: OracleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn OracleEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Replace the owner check with a custom policy
    pub fn access_policy(mut self, access: Arc<dyn AccessPolicy>) -> Self {
        self.access = access;
        self
    }

    pub fn recoverer(mut self, recoverer: Arc<dyn SignerRecovery>) -> Self {
        self.recoverer = recoverer;
        self
    }

    /// Reporters trusted from the start, added in order
    pub fn reporters<I>(mut self, reporters: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        self.reporters.extend(reporters);
        self
    }

    /// Validate the configuration and register the initial reporters.
    ///
    /// Initial reporters go through the registry like later additions, so
    /// duplicates fail with `AlreadyTrusted` and each emits `ReporterAdded`.
    pub fn build(self) -> Result<PriceOracle, BuildError> {
        self.config.validate()?;

        let oracle = PriceOracle {
            state: RwLock::new(OracleState {
                registry: TrustRegistry::new(),
                ledger: RoundLedger::new(),
                description: self.config.description.clone(),
                decimals: self.config.decimals,
            }),
            config: self.config,
            recoverer: self.recoverer,
            clock: self.clock,
            events: self.events,
            access: self.access,
        };

        {
            let mut state = oracle.state.write();
            for reporter in self.reporters {
                oracle.add_reporter_locked(&mut state, reporter)?;
            }
        }

        info!(
            description = %oracle.config.description,
            decimals = oracle.config.decimals,
            trusted = oracle.trusted_count(),
            "price oracle initialized"
        );
        Ok(oracle)
    }
}
