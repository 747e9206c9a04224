//! Scenario catalog.
//!
//! A [`Scenario`] pairs a name and metadata with a constructor that builds
//! its inputs from a seeded generator and returns the workload to time.
//! Inputs are only built when the runner instantiates the scenario, so a
//! full catalog costs nothing until it runs.

use arraybench_core::{DType, Error, Result, TypeSet};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

pub mod arithmetic;
pub mod broadcast;
pub mod chained;
pub mod creation;
pub mod dispatch;
pub mod manipulation;
pub mod reduction;
pub mod slicing;
pub mod thresholds;
pub mod unary;

/// A timed closure with its inputs already captured.
pub type Workload = Box<dyn FnMut()>;

type Builder = Box<dyn Fn(&mut StdRng) -> Workload>;

/// Scenario suites, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Call overhead with and without a preallocated output.
    Dispatch,
    /// Elementwise binary operations.
    Arithmetic,
    /// Elementwise unary math.
    Unary,
    /// Full and per-axis reductions.
    Reduction,
    /// Shape broadcasting over a square matrix.
    Broadcasting,
    /// Array constructors.
    Creation,
    /// Reshape, transpose, join.
    Manipulation,
    /// Views and sums over views.
    Slicing,
    /// Allocating vs preallocated `a + b` over a size sweep.
    SizeThresholds,
    /// Chained temporaries vs one fused reduction.
    ChainedOps,
}

impl Suite {
    /// Every suite in run order.
    pub const ALL: &'static [Suite] = &[
        Suite::Dispatch,
        Suite::Arithmetic,
        Suite::Unary,
        Suite::Reduction,
        Suite::Broadcasting,
        Suite::Creation,
        Suite::Manipulation,
        Suite::Slicing,
        Suite::SizeThresholds,
        Suite::ChainedOps,
    ];

    /// Name recorded in results.
    pub fn name(self) -> &'static str {
        match self {
            Suite::Dispatch => "Dispatch",
            Suite::Arithmetic => "Arithmetic",
            Suite::Unary => "Unary",
            Suite::Reduction => "Reduction",
            Suite::Broadcasting => "Broadcasting",
            Suite::Creation => "Creation",
            Suite::Manipulation => "Manipulation",
            Suite::Slicing => "Slicing",
            Suite::SizeThresholds => "SizeThresholds",
            Suite::ChainedOps => "ChainedOps",
        }
    }

    /// Short key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Suite::Dispatch => "dispatch",
            Suite::Arithmetic => "arithmetic",
            Suite::Unary => "unary",
            Suite::Reduction => "reduction",
            Suite::Broadcasting => "broadcast",
            Suite::Creation => "creation",
            Suite::Manipulation => "manipulation",
            Suite::Slicing => "slicing",
            Suite::SizeThresholds => "thresholds",
            Suite::ChainedOps => "chained",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Suite::ALL
            .iter()
            .copied()
            .find(|suite| suite.key().eq_ignore_ascii_case(s) || suite.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_input(format!("unknown suite: {s}")))
    }
}

/// One named, lazily constructed benchmark.
pub struct Scenario {
    name: String,
    category: &'static str,
    suite: Suite,
    dtype: DType,
    n: usize,
    reference: Option<String>,
    build: Builder,
}

impl Scenario {
    /// Create a scenario over `n` elements of `dtype`.
    pub fn new<B>(
        name: impl Into<String>,
        category: &'static str,
        suite: Suite,
        dtype: DType,
        n: usize,
        build: B,
    ) -> Self
    where
        B: Fn(&mut StdRng) -> Workload + 'static,
    {
        Self {
            name: name.into(),
            category,
            suite,
            dtype,
            n,
            reference: None,
            build: Box::new(build),
        }
    }

    /// Record this scenario's speedup against an earlier scenario of the
    /// same size.
    pub fn relative_to(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operation family.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Owning suite.
    pub fn suite(&self) -> Suite {
        self.suite
    }

    /// Element type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Element count used for throughput.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Bytes per element.
    pub fn element_bytes(&self) -> usize {
        self.dtype.element_bytes()
    }

    /// Name of the scenario this one is compared against.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Build inputs from a fresh generator seeded with `seed`.
    pub fn instantiate(&self, seed: u64) -> Workload {
        let mut rng = StdRng::seed_from_u64(seed);
        (self.build)(&mut rng)
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("suite", &self.suite)
            .field("dtype", &self.dtype)
            .field("n", &self.n)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

/// Which scenarios to build.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Suites to include, run in [`Suite::ALL`] order.
    pub suites: Vec<Suite>,
    /// Element types for type-parameterized suites.
    pub dtypes: Vec<DType>,
    /// Element count for size-parameterized suites.
    pub n: usize,
    /// Use the reduced threshold sweep.
    pub quick: bool,
}

impl CatalogConfig {
    /// Every suite over the common types.
    pub fn new(n: usize) -> Self {
        Self {
            suites: Suite::ALL.to_vec(),
            dtypes: TypeSet::Common.dtypes().to_vec(),
            n,
            quick: false,
        }
    }

    /// Restrict to the given suites.
    pub fn with_suites(mut self, suites: Vec<Suite>) -> Self {
        self.suites = suites;
        self
    }

    /// Restrict to the given element types.
    pub fn with_dtypes(mut self, dtypes: Vec<DType>) -> Self {
        self.dtypes = dtypes;
        self
    }

    /// Toggle the reduced threshold sweep.
    pub fn quick(mut self, quick: bool) -> Self {
        self.quick = quick;
        self
    }

    fn dtypes_in(&self, set: TypeSet) -> Vec<DType> {
        self.dtypes.iter().copied().filter(|d| set.contains(*d)).collect()
    }
}

/// Build the scenarios selected by `config`.
pub fn build(config: &CatalogConfig) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    let n = config.n;

    for &suite in Suite::ALL {
        if !config.suites.contains(&suite) {
            continue;
        }
        let batch = match suite {
            Suite::Dispatch => dispatch::scenarios(n),
            Suite::Arithmetic => arithmetic::scenarios(&config.dtypes_in(TypeSet::Arithmetic), n),
            Suite::Unary => unary::scenarios(&config.dtypes_in(TypeSet::Arithmetic), n),
            Suite::Reduction => reduction::scenarios(&config.dtypes_in(TypeSet::Arithmetic), n),
            Suite::Broadcasting => broadcast::scenarios(n),
            Suite::Creation => creation::scenarios(&config.dtypes_in(TypeSet::Common), n),
            Suite::Manipulation => manipulation::scenarios(n),
            Suite::Slicing => slicing::scenarios(n),
            Suite::SizeThresholds => {
                let sizes = if config.quick {
                    arraybench_core::tiers::quick_threshold_sizes()
                } else {
                    arraybench_core::tiers::threshold_sizes()
                };
                thresholds::scenarios(&config.dtypes_in(TypeSet::Common), &sizes)
            }
            Suite::ChainedOps => chained::scenarios(n),
        };
        tracing::debug!(suite = %suite, count = batch.len(), "built suite");
        scenarios.extend(batch);
    }

    scenarios
}

/// Side of the largest square holding at most `n` elements, at least 1.
pub(crate) fn square_side(n: usize) -> usize {
    ((n as f64).sqrt() as usize).max(1)
}

/// A near-square `(rows, cols)` shape with `rows * cols <= n`.
pub(crate) fn matrix_dims(n: usize) -> (usize, usize) {
    let rows = square_side(n);
    (rows, (n / rows).max(1))
}
