//! Batched dense matrix-multiply backends.
//!
//! Filter construction never depends on how operators are applied. The
//! caller picks a backend through an [`ExecutionContext`] and passes it to
//! every `apply` call, so the resources used by a call are visible at the
//! call site.
//!
//! - [`KernelBackend::Scalar`]: plain loops, fixed summation order
//! - [`KernelBackend::Faer`]: one faer GEMM per (group, field)
//! - `KernelBackend::Parallel`: Rayon over elements (`parallel` feature),
//!   bit-identical to `Scalar`

mod batched;

pub use batched::{batched_apply_faer, batched_apply_scalar};

#[cfg(feature = "parallel")]
pub use batched::batched_apply_parallel;

use faer::Mat;

/// Backend used to apply a per-group operator to all elements of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KernelBackend {
    /// Sequential scalar loops.
    #[default]
    Scalar,
    /// Sequential faer matrix-matrix product.
    Faer,
    /// Rayon-parallel loop over elements.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl KernelBackend {
    /// Compute `output[e, :] = a * input[e, :]` for `n_elements` row-major rows.
    pub fn apply(self, a: &Mat<f64>, input: &[f64], output: &mut [f64], n_elements: usize) {
        match self {
            KernelBackend::Scalar => batched_apply_scalar(a, input, output, n_elements),
            KernelBackend::Faer => batched_apply_faer(a, input, output, n_elements),
            #[cfg(feature = "parallel")]
            KernelBackend::Parallel => batched_apply_parallel(a, input, output, n_elements),
        }
    }

    /// Human-readable name for debugging and logging.
    pub fn name(self) -> &'static str {
        match self {
            KernelBackend::Scalar => "scalar",
            KernelBackend::Faer => "faer",
            #[cfg(feature = "parallel")]
            KernelBackend::Parallel => "parallel",
        }
    }
}

/// Execution resources for one `apply` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    backend: KernelBackend,
}

impl ExecutionContext {
    /// Create a context using the given backend.
    pub fn new(backend: KernelBackend) -> Self {
        Self { backend }
    }

    /// Sequential scalar context.
    pub fn scalar() -> Self {
        Self::new(KernelBackend::Scalar)
    }

    /// Sequential faer GEMM context.
    pub fn faer() -> Self {
        Self::new(KernelBackend::Faer)
    }

    /// Rayon-parallel context.
    #[cfg(feature = "parallel")]
    pub fn parallel() -> Self {
        Self::new(KernelBackend::Parallel)
    }

    /// The selected backend.
    pub fn backend(&self) -> KernelBackend {
        self.backend
    }
}
