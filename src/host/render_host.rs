use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::foundation::error::{SkypaintError, SkypaintResult, SurfaceError};
use crate::host::config::HostConfig;
use crate::host::stage::{LoopCounters, LoopStats, Stage};
use crate::paint::PhaseSnapshot;
use crate::paint::registry::PainterRegistry;
use crate::render::canvas::Canvas;
use crate::render::surface::DrawingSurface;
use crate::weather::WeatherType;

const PHASE_REPLY_TIMEOUT: Duration = Duration::from_secs(1);
const THREAD_NAME: &str = "skypaint-render";

/// Callback fired on the control thread after the weather changes.
pub type WeatherListener = Box<dyn FnMut(WeatherType) + Send>;

enum Command {
    SetWeather(WeatherType),
    Resize(u32, u32),
    Pause,
    Resume,
    Phase(Sender<Option<PhaseSnapshot>>),
    Stop,
}

struct Worker {
    tx: Sender<Command>,
    handle: JoinHandle<Stage>,
}

/// Drives one drawing surface: picks the painter, and runs the redraw loop on its own thread
/// while the surface exists and the host is visible.
///
/// All methods are called from a single control thread. Painter state is only ever mutated by
/// whichever side currently owns the stage: the host while stopped, the loop thread while
/// running.
pub struct RenderHost {
    config: HostConfig,
    weather: WeatherType,
    has_surface: bool,
    visible: bool,
    started: bool,
    stage: Option<Stage>,
    worker: Option<Worker>,
    counters: Arc<LoopCounters>,
    on_weather_changed: Option<WeatherListener>,
}

impl std::fmt::Debug for RenderHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderHost")
            .field("weather", &self.weather)
            .field("has_surface", &self.has_surface)
            .field("visible", &self.visible)
            .field("started", &self.started)
            .field("running", &self.worker.is_some())
            .finish_non_exhaustive()
    }
}

impl RenderHost {
    pub fn new(config: HostConfig, surface: Box<dyn DrawingSurface>) -> SkypaintResult<Self> {
        config.validate()?;
        let counters = Arc::new(LoopCounters::default());
        let registry = PainterRegistry::new(config.density()?);
        let mut stage = Stage::new(
            registry,
            surface,
            config.idle_color(),
            Arc::clone(&counters),
        );
        stage.set_weather(config.initial_weather);
        Ok(Self {
            weather: config.initial_weather,
            config,
            has_surface: false,
            visible: true,
            started: true,
            stage: Some(stage),
            worker: None,
            counters,
            on_weather_changed: None,
        })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn weather(&self) -> WeatherType {
        self.weather
    }

    pub fn set_on_weather_changed(&mut self, listener: impl FnMut(WeatherType) + Send + 'static) {
        self.on_weather_changed = Some(Box::new(listener));
    }

    pub fn clear_on_weather_changed(&mut self) {
        self.on_weather_changed = None;
    }

    /// Switch painters. Repeating the current weather is a no-op and does not notify.
    #[tracing::instrument(skip(self))]
    pub fn set_weather(&mut self, kind: WeatherType) -> SkypaintResult<()> {
        if kind == self.weather {
            return Ok(());
        }
        self.weather = kind;
        self.dispatch(Command::SetWeather(kind))?;
        if let Some(listener) = self.on_weather_changed.as_mut() {
            listener(kind);
        }
        Ok(())
    }

    pub fn surface_created(&mut self) -> SkypaintResult<()> {
        self.has_surface = true;
        self.update_running()
    }

    /// Forward new surface dimensions to the active painter.
    pub fn surface_changed(&mut self, width: u32, height: u32) -> SkypaintResult<()> {
        self.dispatch(Command::Resize(width, height))?;
        self.has_surface = true;
        self.update_running()
    }

    pub fn surface_destroyed(&mut self) -> SkypaintResult<()> {
        self.has_surface = false;
        self.update_running()
    }

    /// `false` freezes the loop in place without detaching the painter; `true` resumes it.
    pub fn started(&mut self, started: bool) -> SkypaintResult<()> {
        if self.started == started {
            return Ok(());
        }
        self.started = started;
        if self.worker.is_some() {
            let cmd = if started {
                Command::Resume
            } else {
                Command::Pause
            };
            self.dispatch(cmd)?;
        }
        Ok(())
    }

    pub fn visibility_changed(&mut self, visible: bool) -> SkypaintResult<()> {
        self.visible = visible;
        self.update_running()
    }

    /// Whether the loop thread is alive. A loop that ended on its own (surface torn down
    /// mid-frame) reports `false`.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|w| !w.handle.is_finished())
    }

    pub fn is_paused(&self) -> bool {
        self.is_running() && !self.started
    }

    pub fn stats(&self) -> LoopStats {
        self.counters.snapshot()
    }

    /// Animation phase of the active painter, or `None` when no painter is active.
    pub fn phase(&mut self) -> Option<PhaseSnapshot> {
        self.reap();
        if let Some(stage) = self.stage.as_mut() {
            return stage.phase();
        }
        let worker = self.worker.as_ref()?;
        let (tx, rx) = mpsc::channel();
        worker.tx.send(Command::Phase(tx)).ok()?;
        rx.recv_timeout(PHASE_REPLY_TIMEOUT).ok().flatten()
    }

    /// Stop the loop and wait for it. Also runs on drop.
    pub fn shutdown(&mut self) -> SkypaintResult<()> {
        self.stop_worker()
    }

    fn update_running(&mut self) -> SkypaintResult<()> {
        self.reap();
        let run = self.has_surface && self.visible;
        match (run, self.worker.is_some()) {
            (true, false) => self.start_worker(),
            (false, true) => self.stop_worker(),
            _ => Ok(()),
        }
    }

    fn start_worker(&mut self) -> SkypaintResult<()> {
        let Some(stage) = self.stage.take() else {
            return Err(SkypaintError::worker("render stage is missing"));
        };
        let (tx, rx) = mpsc::channel();
        let interval = self.config.frame_interval();
        let paused = !self.started;
        let handle = std::thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || run_loop(stage, &rx, interval, paused))
            .map_err(|e| SkypaintError::worker(format!("spawn render loop: {e}")))?;
        self.worker = Some(Worker { tx, handle });
        Ok(())
    }

    fn stop_worker(&mut self) -> SkypaintResult<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        let _ = worker.tx.send(Command::Stop);
        let stage = worker
            .handle
            .join()
            .map_err(|_| SkypaintError::worker("render loop panicked"))?;
        self.stage = Some(stage);
        Ok(())
    }

    /// Take the stage back from a loop that already ended by itself.
    fn reap(&mut self) {
        if self
            .worker
            .as_ref()
            .is_some_and(|w| w.handle.is_finished())
            && let Err(err) = self.stop_worker()
        {
            tracing::warn!(%err, "render loop could not be reaped");
        }
    }

    /// Apply a state command wherever the stage currently lives.
    fn dispatch(&mut self, cmd: Command) -> SkypaintResult<()> {
        self.reap();
        if let Some(worker) = self.worker.as_ref() {
            match worker.tx.send(cmd) {
                Ok(()) => return Ok(()),
                Err(mpsc::SendError(cmd)) => {
                    self.stop_worker()?;
                    return self.apply_local(cmd);
                }
            }
        }
        self.apply_local(cmd)
    }

    fn apply_local(&mut self, cmd: Command) -> SkypaintResult<()> {
        let Some(stage) = self.stage.as_mut() else {
            return Err(SkypaintError::worker("render stage is missing"));
        };
        match cmd {
            Command::SetWeather(kind) => stage.set_weather(kind),
            Command::Resize(w, h) => stage.resize(w, h),
            Command::Phase(reply) => {
                let _ = reply.send(stage.phase());
            }
            Command::Pause | Command::Resume | Command::Stop => {}
        }
        Ok(())
    }
}

impl Drop for RenderHost {
    fn drop(&mut self) {
        if let Err(err) = self.stop_worker() {
            tracing::warn!(%err, "render loop shutdown failed");
        }
    }
}

/// Body of the loop thread. Returns the stage so the host can keep it across restarts.
fn run_loop(mut stage: Stage, rx: &Receiver<Command>, interval: Duration, paused: bool) -> Stage {
    let mut paused = paused;
    let mut canvas: Option<Canvas> = None;
    stage.attach_active();
    tracing::info!(weather = %stage.active(), paused, "render loop started");

    'frames: loop {
        if !paused {
            match stage.render_frame(&mut canvas) {
                Ok(_) => {}
                Err(SurfaceError::Destroyed) => {
                    tracing::warn!("surface gone, render loop ending");
                    break;
                }
                Err(err) => tracing::warn!(%err, "frame dropped"),
            }
        }

        let first = if paused {
            match rx.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        } else {
            match rx.recv_timeout(interval) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        };

        for cmd in first.into_iter().chain(std::iter::from_fn(|| rx.try_recv().ok())) {
            match cmd {
                Command::SetWeather(kind) => stage.set_weather(kind),
                Command::Resize(w, h) => stage.resize(w, h),
                Command::Pause => {
                    paused = true;
                    tracing::debug!("render loop paused");
                }
                Command::Resume => {
                    paused = false;
                    tracing::debug!("render loop resumed");
                }
                Command::Phase(reply) => {
                    let _ = reply.send(stage.phase());
                }
                Command::Stop => break 'frames,
            }
        }
    }

    stage.detach_active();
    let stats = stage.stats();
    tracing::info!(
        presented = stats.presented,
        skipped = stats.skipped,
        "render loop stopped"
    );
    stage
}

#[cfg(test)]
#[path = "../../tests/unit/host/render_host.rs"]
mod tests;
