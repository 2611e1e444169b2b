//! Wall-clock timer: `Date.now()` in the browser, `Instant` natively.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        now() - self.start
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `f` and return its result with the elapsed milliseconds
pub(crate) fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let timer = PerfTimer::start();
    let out = f();
    (out, timer.elapsed_ms())
}
