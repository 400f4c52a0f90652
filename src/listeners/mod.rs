use crate::CommandLine;

/// Something to run after every [`CommandLine::init`].
///
/// Listeners are told about every re-initialization, including while lookups
/// are disabled, so dependent setup code still runs and sees defaults.
pub trait Listener {
    fn on_init(&self, cmd: &CommandLine);
}

impl<F> Listener for F
where
    F: Fn(&CommandLine),
{
    fn on_init(&self, cmd: &CommandLine) {
        self(cmd)
    }
}

/// Listeners in registration order.
#[derive(Default)]
pub struct Registry {
    inner: Vec<Box<dyn Listener>>,
}

impl Registry {
    pub fn register<L: Listener + 'static>(&mut self, listener: L) {
        self.inner.push(Box::new(listener));
    }

    pub fn notify(&self, cmd: &CommandLine) {
        for listener in &self.inner {
            listener.on_init(cmd);
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("len", &self.inner.len()).finish()
    }
}
