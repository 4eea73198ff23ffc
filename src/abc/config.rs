//! ABC configuration.
//!
//! [`AbcConfig`] holds all parameters that control the bee-colony loop.

/// Configuration for the Artificial Bee Colony optimizer.
///
/// # Defaults
///
/// ```
/// use abc_sched::abc::AbcConfig;
///
/// let config = AbcConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.iterations, 5);
/// assert!(!config.use_opposition);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use abc_sched::abc::AbcConfig;
///
/// let config = AbcConfig::default()
///     .with_population_size(50)
///     .with_iterations(20)
///     .with_opposition(0.3)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcConfig {
    /// Number of food sources in the swarm.
    ///
    /// Split 50/50 between employed and onlooker bees; an odd value is
    /// incremented to the next even one at run time.
    pub population_size: usize,

    /// Number of iterations of the phase loop. The run always completes
    /// this many rounds; there is no early stopping.
    pub iterations: usize,

    /// Whether to apply opposition-based learning after the scout phase.
    pub use_opposition: bool,

    /// Opposition reflection coefficient.
    ///
    /// Values outside `[0, 1]` are accepted but push every reflected gene
    /// out of range, degrading the enhancer to per-gene random reseeding.
    pub opposition_coefficient: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            iterations: 5,
            use_opposition: false,
            opposition_coefficient: 0.3,
            seed: None,
        }
    }
}

impl AbcConfig {
    /// Sets the swarm size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Enables opposition-based learning with the given coefficient.
    pub fn with_opposition(mut self, coefficient: f64) -> Self {
        self.use_opposition = true;
        self.opposition_coefficient = coefficient;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The swarm size actually used: odd values are incremented so the
    /// population splits evenly into employed and onlooker halves.
    pub fn effective_population_size(&self) -> usize {
        if self.population_size % 2 == 0 {
            self.population_size
        } else {
            self.population_size + 1
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        // Four, not two: each employed bee needs a distinct employed
        // partner, so the employed half must hold at least two slots.
        if self.population_size < 4 {
            return Err("population_size must be at least 4".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.opposition_coefficient.is_finite() {
            return Err("opposition_coefficient must be finite".into());
        }
        Ok(())
    }
}
