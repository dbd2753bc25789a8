pub mod casing;
pub mod error;
pub mod plan;
pub mod registry;
pub mod render;
pub mod write;

use std::path::PathBuf;

use crate::error::Result;
use crate::plan::{plan, RenderPlan, ScaffoldRequest};
use crate::registry::Registry;
use crate::write::{write_plan, Manifest};

/// Everything needed to run one scaffold operation.
pub struct ScaffoldOptions {
    pub request: ScaffoldRequest,
    pub target_dir: PathBuf,
    pub overwrite: bool,
}

/// A scaffold that has been planned but not yet written.
pub struct ScaffoldPlan {
    pub render_plan: RenderPlan,
    pub target_dir: PathBuf,
    pub overwrite: bool,
}

/// Plan a scaffold: validate the request, derive variables, and render every
/// file in memory. No filesystem effects; all planning-phase errors surface
/// here, before anything touches disk.
pub fn plan_scaffold(registry: &Registry, options: ScaffoldOptions) -> Result<ScaffoldPlan> {
    let render_plan = plan(registry, &options.request)?;
    Ok(ScaffoldPlan {
        render_plan,
        target_dir: options.target_dir,
        overwrite: options.overwrite,
    })
}

/// Execute a previously planned scaffold. Write-phase problems are recorded
/// in the returned manifest, never thrown.
pub fn execute_scaffold(plan: &ScaffoldPlan) -> Manifest {
    write_plan(&plan.render_plan, &plan.target_dir, plan.overwrite)
}

/// Plan and write in one step.
pub fn scaffold(registry: &Registry, options: ScaffoldOptions) -> Result<Manifest> {
    let plan = plan_scaffold(registry, options)?;
    Ok(execute_scaffold(&plan))
}
