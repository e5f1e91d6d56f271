//! Filter a discontinuous profile and print its modal decay.
//!
//! Run with: `cargo run --example filter_step`
//!
//! A unit step sampled on high-order interval elements carries slowly
//! decaying modal coefficients (Gibbs oscillations). The exponential
//! filter damps the upper modes while leaving element means intact.

use dg_filter::{
    Discretization, ElementGroup, ExecutionContext, FilterConfig, GroupIndex, SimplexGroup,
    SpectralFilter, Vandermonde,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let order = 8;
    let n_elements = 4;
    let group = SimplexGroup::new(1, order, n_elements);
    let vander = Vandermonde::from_group(&group, GroupIndex::ZERO)?;
    let discr = Discretization::new().with_group(group);

    // Step at x = 0.1 inside element 1 of [-1, 3] split into unit-width elements
    let u = discr.field_from_fn(|_, k, r| {
        let x = k.get() as f64 + 0.5 * (r[0] + 1.0) - 1.0;
        if x < 0.1 { 1.0 } else { 0.0 }
    });

    let config = FilterConfig::new(1, order, 3, 4);
    let filter = SpectralFilter::from_config(&discr, &config)?;
    let filtered = filter.apply_field(&ExecutionContext::default(), &u)?;

    println!("Damping factors: {:?}", filter.modal_filter().diagonal());
    println!();

    let g = GroupIndex::ZERO;
    let n_nodes = discr.group(g).n_nodes();
    for k in 0..n_elements {
        let before = vander.to_modal(u.group(g).element(k))?;
        let after = vander.to_modal(filtered.group(g).element(k))?;
        println!("Element {} ({} nodes)", k, n_nodes);
        println!("  mode   before        after");
        for (m, (b, a)) in before.iter().zip(&after).enumerate() {
            println!("  {:4}  {:12.4e}  {:12.4e}", m, b, a);
        }
    }

    println!();
    println!(
        "max |u|: {:.6} -> {:.6}",
        u.max_abs(),
        filtered.max_abs()
    );

    Ok(())
}
