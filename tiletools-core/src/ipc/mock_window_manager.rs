use super::{EventStream, WindowManager};
use crate::command::CommandBatch;
use crate::errors::{Result, TileError};
use crate::models::{Output, Tree, WindowEvent, Workspace};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

type ExecuteHook = Box<dyn Fn(&str, &mut MockState)>;

/// Everything the mock answers with. Tests may change it from an execute hook to emulate
/// the window manager reacting to a command.
#[derive(Debug, Default, Clone)]
pub struct MockState {
    pub tree: Option<Tree>,
    pub outputs: Vec<Output>,
    pub workspaces: Vec<Workspace>,
    pub marks: Vec<String>,
    pub events: VecDeque<WindowEvent>,
    pub executed: Vec<String>,
    /// Number of requests executed when the window events were subscribed to.
    pub subscribed_after: Option<usize>,
}

#[derive(Default)]
pub struct MockWindowManager {
    state: RefCell<MockState>,
    on_execute: Option<ExecuteHook>,
}

impl MockWindowManager {
    pub fn new(state: MockState) -> Self {
        Self {
            state: RefCell::new(state),
            on_execute: None,
        }
    }

    #[must_use]
    pub fn on_execute(mut self, hook: impl Fn(&str, &mut MockState) + 'static) -> Self {
        self.on_execute = Some(Box::new(hook));
        self
    }

    /// Command strings received so far, one per request.
    pub fn executed(&self) -> Vec<String> {
        self.state.borrow().executed.clone()
    }

    /// How many requests had been executed when the window events were subscribed to.
    pub fn subscribed_after(&self) -> Option<usize> {
        self.state.borrow().subscribed_after
    }
}

impl WindowManager for MockWindowManager {
    type Events = MockEvents;

    async fn get_tree(&self) -> Result<Tree> {
        self.state
            .borrow()
            .tree
            .clone()
            .ok_or_else(|| TileError::MalformedTree("mock has no tree".to_owned()))
    }

    async fn get_outputs(&self) -> Result<Vec<Output>> {
        Ok(self.state.borrow().outputs.clone())
    }

    async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.state.borrow().workspaces.clone())
    }

    async fn get_marks(&self) -> Result<Vec<String>> {
        Ok(self.state.borrow().marks.clone())
    }

    async fn execute(&self, commands: impl Into<CommandBatch>) -> Result<()> {
        let batch = commands.into();
        if batch.is_empty() {
            return Ok(());
        }
        let commands = batch.to_string();
        let mut state = self.state.borrow_mut();
        if let Some(hook) = &self.on_execute {
            hook(&commands, &mut state);
        }
        state.executed.push(commands);
        Ok(())
    }

    async fn subscribe_window_events(&self) -> Result<MockEvents> {
        let mut state = self.state.borrow_mut();
        state.subscribed_after = Some(state.executed.len());
        Ok(MockEvents {
            events: std::mem::take(&mut state.events),
        })
    }
}

/// Replays queued events; an empty queue behaves like a timeout.
pub struct MockEvents {
    events: VecDeque<WindowEvent>,
}

impl EventStream for MockEvents {
    async fn wait_for_event(&mut self, _timeout: Duration) -> Result<Option<WindowEvent>> {
        Ok(self.events.pop_front())
    }
}
