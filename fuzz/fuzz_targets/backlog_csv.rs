use honggfuzz::fuzz;
use sprintpack::{plan, read_items, PlannerConfig};

fn main() {
    let config = PlannerConfig::with_max_cells(1 << 16);
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(items) = read_items(data) {
                if let Ok(plan) = plan(&items, 64, &config) {
                    assert!(plan.total_cost <= 64);
                }
            }
        });
    }
}
