// Example: gate section entrance animations on first visibility.
use carousel::{VisibilityOptions, VisibilityRegistry};

fn main() {
    let mut gates = VisibilityRegistry::new();
    for section in ["philosophy", "experiences", "testimonials"] {
        gates.observe(section, VisibilityOptions::default());
    }

    // Simulate a scroll: sections come into view one after another, then the
    // user scrolls back up.
    let updates = [
        ("philosophy", 0.4),
        ("experiences", 0.05), // below threshold, stays unseen
        ("experiences", 0.2),
        ("testimonials", 1.0),
        ("philosophy", 0.0), // scrolled past; the latch holds
    ];
    for (section, ratio) in updates {
        gates.on_intersection(&section, ratio);
        println!(
            "{section}: ratio {ratio:.2} -> seen={} watching={}",
            gates.is_seen(&section),
            gates.is_watching(&section)
        );
    }
}
