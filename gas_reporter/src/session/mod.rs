//!
//! The test run session driven by lifecycle events.
//!

pub mod console;
pub mod event;

use std::path::PathBuf;

use crate::client::Client;
use crate::controller::RunController;
use crate::records::Records;

use self::console::Console;
use self::event::Event;

///
/// The test run session driven by lifecycle events.
///
/// The records are built when the run starts, so that artifacts compiled right before the
/// run are picked up. Events arriving before `start` start the run implicitly.
///
#[derive(Debug)]
pub struct Session<C>
where
    C: Client,
{
    /// The node client, until the run starts.
    client: Option<C>,
    /// The run controller, after the run starts.
    controller: Option<RunController<C>>,
    /// The per-test console output.
    console: Console,
    /// The compiled artifacts directory.
    artifacts_path: PathBuf,
    /// The Solidity sources directory.
    sources_path: Option<PathBuf>,
    /// Whether the `end` event has been received.
    is_ended: bool,
}

impl<C> Session<C>
where
    C: Client,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        client: C,
        console: Console,
        artifacts_path: PathBuf,
        sources_path: Option<PathBuf>,
    ) -> Self {
        Self {
            client: Some(client),
            controller: None,
            console,
            artifacts_path,
            sources_path,
            is_ended: false,
        }
    }

    ///
    /// Handles a single lifecycle event.
    ///
    pub fn handle(&mut self, event: Event) -> anyhow::Result<()> {
        if self.is_ended {
            anyhow::bail!("Event {event:?} received after the run end");
        }
        log::trace!("Event: {event:?}");

        match event {
            Event::Start => {
                if self.controller.is_some() {
                    anyhow::bail!("The run has already started");
                }
                self.start()?;
            }
            Event::Suite { title } => self.console.suite(title.as_str()),
            Event::SuiteEnd => self.console.suite_end(),
            Event::Test => self.controller()?.on_test_start()?,
            Event::HookEnd => self.controller()?.on_hooks_end()?,
            Event::Pass { title, duration_ms } => {
                let attribution = self.controller()?.on_test_pass()?;
                self.console
                    .pass(title.as_str(), duration_ms, attribution.gas_used);
            }
            Event::Fail { title } => {
                self.controller()?.on_test_fail();
                self.console.fail(title.as_str());
            }
            Event::Pending { title } => self.console.pending(title.as_str()),
            Event::End => self.is_ended = true,
        }
        Ok(())
    }

    ///
    /// Handles all events of a stream in order, stopping at the first error.
    ///
    pub fn handle_all<I>(&mut self, events: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = anyhow::Result<Event>>,
    {
        for event in events.into_iter() {
            self.handle(event?)?;
        }
        Ok(())
    }

    ///
    /// The number of failed tests so far.
    ///
    pub fn failures(&self) -> usize {
        self.console.failures()
    }

    ///
    /// Ends the session and hands over the records.
    ///
    /// A session that never started still loads the records, so the report lists nothing.
    ///
    pub fn finish(mut self) -> anyhow::Result<Records> {
        if !self.is_ended {
            log::debug!("The event stream ended without the `end` event");
        }
        self.controller()?;
        self.controller
            .take()
            .map(RunController::finish)
            .ok_or_else(|| anyhow::anyhow!("The run controller is not initialized"))
    }

    ///
    /// Returns the run controller, starting the run if needed.
    ///
    fn controller(&mut self) -> anyhow::Result<&mut RunController<C>> {
        if self.controller.is_none() {
            self.start()?;
        }
        self.controller
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("The run controller is not initialized"))
    }

    ///
    /// Builds the records and the run controller.
    ///
    /// The client is taken only after the records are built, so a failed start can be retried.
    ///
    fn start(&mut self) -> anyhow::Result<()> {
        let records = Records::build(self.artifacts_path.as_path(), self.sources_path.as_deref())?;
        let client = self
            .client
            .take()
            .ok_or_else(|| anyhow::anyhow!("The node client has already been taken"))?;
        self.console.status(
            "Loaded",
            format!(
                "{} contracts with {} methods",
                records.deployments().len(),
                records.methods().len()
            )
            .as_str(),
        );
        self.controller = Some(RunController::new(client, records));
        Ok(())
    }
}
