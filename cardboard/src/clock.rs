use std::time::Instant;

// Common vsync rates worth snapping small timing wobbles onto.
const SNAP_RATES: [f32; 5] = [15.0, 30.0, 60.0, 120.0, 144.0];

/// A fixed-timestep accumulator for the simulation loop.
///
/// Each [`Clock::tick`] converts wall-clock time since the previous tick
/// into a whole number of `dt`-sized simulation steps, carrying the
/// remainder forward.  Elapsed times within `fudge` of a standard vsync
/// interval are snapped to it, and a single tick never reports more than
/// `max_steps` steps, so one slow frame can't snowball into an
/// ever-growing backlog.
pub struct Clock {
    acc: f32,
    dt: f32,
    fudge: f32,
    max_steps: usize,
    last: Instant,
}

impl Clock {
    pub fn new(dt: f32, fudge: f32, max_steps: usize) -> Self {
        Self {
            acc: 0.0,
            dt,
            fudge,
            max_steps,
            last: Instant::now(),
        }
    }

    /// Forget any banked time, e.g. after a long load.
    pub fn reset(&mut self) {
        self.acc = 0.0;
        self.last = Instant::now();
    }

    /// Returns how many simulation steps to run for the elapsed time.
    pub fn tick(&mut self) -> usize {
        let mut elapsed = self.last.elapsed().as_secs_f32();
        self.last = Instant::now();

        for rate in SNAP_RATES {
            if (elapsed - 1.0 / rate).abs() < self.fudge {
                elapsed = 1.0 / rate;
            }
        }
        if elapsed > self.max_steps as f32 * self.dt {
            self.acc = 0.0;
            elapsed = self.dt;
        }

        self.acc += elapsed;
        let steps = (self.acc / self.dt) as usize;
        self.acc -= steps as f32 * self.dt;
        steps
    }
}
