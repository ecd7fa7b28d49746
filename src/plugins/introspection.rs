use super::PluginId;
use std::cell::RefCell;
use std::marker::PhantomData;

/// Finds the plugin that initiated the current call when the caller did not say.
pub trait CallerIntrospection {
    fn calling_plugin(&self) -> Option<PluginId>;
}

#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Plugin(PluginId),
    Host(String),
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// Per-thread stack of plugin and host frames.
///
/// Code entering a plugin callback pushes a frame with [`CallStack::enter_plugin`] and
/// keeps the returned guard alive for the duration of the callback. Inference walks the
/// frames innermost first and picks the first plugin frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallStack;

impl CallStack {
    pub fn enter_plugin(plugin: PluginId) -> FrameGuard {
        Self::push(Frame::Plugin(plugin))
    }

    pub fn enter_host(name: impl Into<String>) -> FrameGuard {
        Self::push(Frame::Host(name.into()))
    }

    fn push(frame: Frame) -> FrameGuard {
        let depth = FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            let depth = frames.len();
            frames.push(frame);
            depth
        });
        FrameGuard {
            depth,
            _not_send: PhantomData,
        }
    }
}

impl CallerIntrospection for CallStack {
    fn calling_plugin(&self) -> Option<PluginId> {
        FRAMES.with(|frames| {
            frames.borrow().iter().rev().find_map(|frame| match frame {
                Frame::Plugin(id) => Some(id.clone()),
                Frame::Host(name) => {
                    log::trace!("Skipping host frame {}", name);
                    None
                }
            })
        })
    }
}

/// Pops its frame (and anything pushed above it) when dropped.
#[must_use = "the frame is popped as soon as the guard is dropped"]
pub struct FrameGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        FRAMES.with(|frames| frames.borrow_mut().truncate(self.depth));
    }
}
