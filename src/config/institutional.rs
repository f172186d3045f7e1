//! Static institutional-investor reference table. Not part of the fetched data.

use crate::models::{InstitutionalPattern, InvestorClass};

pub const INSTITUTIONAL_PATTERNS: [InstitutionalPattern; 3] = [
    InstitutionalPattern {
        class: InvestorClass::HedgeFunds,
        timing: "6-8 months prior",
        signal_type: "First mover",
        reliability: 0.85,
        volume_threshold: "2x average",
    },
    InstitutionalPattern {
        class: InvestorClass::PensionFunds,
        timing: "3-4 months prior",
        signal_type: "Second wave",
        reliability: 0.75,
        volume_threshold: "1.5x average",
    },
    InstitutionalPattern {
        class: InvestorClass::MutualFunds,
        timing: "1-2 months prior",
        signal_type: "Final adjustment",
        reliability: 0.65,
        volume_threshold: "1.2x average",
    },
];

// Reliability must stay within [0, 1].
const _: () = {
    let mut i = 0;
    while i < INSTITUTIONAL_PATTERNS.len() {
        let r = INSTITUTIONAL_PATTERNS[i].reliability;
        assert!(r >= 0.0 && r <= 1.0);
        i += 1;
    }
};
