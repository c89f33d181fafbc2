//! Fixed analyst guidance per risk tier.

use super::RiskLevel;

#[derive(Debug, Clone, Copy)]
pub struct TierGuidance {
    pub description: &'static str,
    pub remediation_steps: [&'static str; 3],
}

const HIGH: TierGuidance = TierGuidance {
    description: "Transactions with a high probability of being fraudulent (risk probability > 0.6). \
                  These transactions typically require immediate investigation and action.",
    remediation_steps: [
        "1. Block IP/Region: If geographic anomalies are detected, block traffic from the suspicious region temporarily.",
        "2. Temporary Account Lock: Suspend transactions from the associated account until verified by the user or SOC team.",
        "3. User Verification: Contact the user to confirm if the transaction is legitimate.",
    ],
};

const MEDIUM: TierGuidance = TierGuidance {
    description: "Transactions with a medium probability of fraud (risk probability 0.3–0.6). \
                  These transactions might indicate early signs of fraudulent behavior.",
    remediation_steps: [
        "1. Delayed Authorization: Hold the transaction temporarily for further validation before completion.",
        "2. User Notification: Send a security alert to the user, prompting them to verify the transaction.",
        "3. Geo-Restriction Analysis: Verify the legitimacy of the transaction based on the location. If it’s an occasional deviation, allow upon user confirmation.",
    ],
};

const LOW: TierGuidance = TierGuidance {
    description: "Transactions with minimal fraud probability (risk probability ≤ 0.3). \
                  These transactions align with the user's regular patterns and behaviors.",
    remediation_steps: [
        "1. Behavioral Monitoring: Continuously monitor for new patterns or changes in the user’s typical transaction behavior.",
        "2. Normal Processing: Allow the transaction to proceed without interruptions.",
        "3. Periodic Review: Include these transactions in regular audit cycles for assurance.",
    ],
};

impl RiskLevel {
    pub fn guidance(self) -> &'static TierGuidance {
        match self {
            RiskLevel::High => &HIGH,
            RiskLevel::Medium => &MEDIUM,
            RiskLevel::Low => &LOW,
        }
    }
}
