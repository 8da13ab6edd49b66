//! Decision table - implementation checklists per (discipline, scope).
//!
//! The table is authored once and never mutated. `lookup` is total: any pair
//! without an authored entry, including disciplines outside the known key set,
//! resolves to [`DEFAULT_STEPS`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::catalog::DisciplineKey;
use crate::domain::foundation::{DisciplineId, ScopeId};

/// Ordered checklist steps.
pub type Steps = &'static [&'static str];

/// Generic checklist for pairs the table has no entry for.
pub const DEFAULT_STEPS: Steps = &[
    "Review applicable requirements for your use case",
    "Implement appropriate controls and procedures",
    "Monitor effectiveness and adjust as needed",
    "Document your implementation for compliance",
];

/// Returns the checklist for a discipline and scope.
///
/// Never fails and never returns an empty sequence.
pub fn lookup(discipline: &DisciplineId, scope: ScopeId) -> Steps {
    DisciplineKey::from_id(discipline)
        .and_then(|key| authored(key, scope))
        .unwrap_or(DEFAULT_STEPS)
}

/// Returns the authored entry for a known key, if one exists.
pub fn authored(key: DisciplineKey, scope: ScopeId) -> Option<Steps> {
    TABLE.get(&(key, scope)).copied()
}

/// Iterates over every authored entry.
pub fn entries() -> impl Iterator<Item = (DisciplineKey, ScopeId, Steps)> {
    TABLE.iter().map(|(&(key, scope), &steps)| (key, scope, steps))
}

static TABLE: Lazy<HashMap<(DisciplineKey, ScopeId), Steps>> = Lazy::new(|| {
    use DisciplineKey::*;

    let rows: [(DisciplineKey, u32, Steps); 25] = [
        (
            Governance,
            1,
            &[
                "Review and document terms of service for each AI tool",
                "Create acceptable use policy for generative AI tools",
                "Implement training for employees on AI data handling",
                "Set up monitoring for policy compliance",
            ],
        ),
        (
            Governance,
            2,
            &[
                "Review enterprise agreements and data handling practices",
                "Document service provider's compliance posture",
                "Create policies for acceptable data classifications",
                "Monitor for changes in licensing terms",
            ],
        ),
        (
            Governance,
            3,
            &[
                "Establish data governance for model inputs and outputs",
                "Implement logging for all model interactions",
                "Define acceptable use policies for your application",
                "Create model selection and approval process",
            ],
        ),
        (
            Governance,
            4,
            &[
                "Classify model according to fine-tuning data sensitivity",
                "Implement data governance for training datasets",
                "Document data lineage and model versioning",
                "Create model update and rollback procedures",
            ],
        ),
        (
            Governance,
            5,
            &[
                "Develop comprehensive model governance program",
                "Implement data lineage tracking for all training data",
                "Create rigorous testing and validation procedures",
                "Establish model lifecycle management processes",
            ],
        ),
        (
            Legal,
            1,
            &[
                "Review provider terms of service and privacy policies",
                "Assess data exposure risks in prompts",
                "Create legal guidelines for AI tool usage",
                "Monitor for terms of service changes",
            ],
        ),
        (
            Legal,
            2,
            &[
                "Review enterprise agreements and data processing terms",
                "Understand data usage for model training",
                "Negotiate data residency requirements",
                "Document opt-out procedures for data usage",
            ],
        ),
        (
            Legal,
            3,
            &[
                "Review service and model provider legal terms",
                "Assess indemnification policies for copyright",
                "Create feedback mechanisms protecting sensitive data",
                "Monitor regulatory changes affecting your use case",
            ],
        ),
        (
            Legal,
            4,
            &[
                "Address GDPR right to erasure challenges",
                "Document copyright and IP implications",
                "Plan for potential model retraining needs",
                "Create procedures for handling data deletion requests",
            ],
        ),
        (
            Legal,
            5,
            &[
                "Develop terms of service for your model",
                "Address IP ownership for training data and outputs",
                "Prepare for regulatory classification of your AI system",
                "Create legal documentation for model usage",
            ],
        ),
        (
            Risk,
            1,
            &[
                "Assess third-party provider security practices",
                "Train users on AI-specific threats",
                "Monitor for sensitive data disclosure",
                "Implement incident response procedures",
            ],
        ),
        (
            Risk,
            2,
            &[
                "Evaluate vendor security practices and SLAs",
                "Protect API keys and access credentials",
                "Assess data reuse risks by providers",
                "Create vendor risk assessment process",
            ],
        ),
        (
            Risk,
            3,
            &[
                "Conduct threat modeling for your application",
                "Implement protection against prompt injection",
                "Monitor for unusual model usage patterns",
                "Apply security frameworks like MITRE ATLAS",
            ],
        ),
        (
            Risk,
            4,
            &[
                "Assess data leakage risks from fine-tuned models",
                "Implement protection against model poisoning",
                "Carefully select and validate fine-tuning data",
                "Monitor fine-tuning pipeline security",
            ],
        ),
        (
            Risk,
            5,
            &[
                "Conduct comprehensive threat modeling",
                "Implement protection against data poisoning",
                "Secure entire model development lifecycle",
                "Create ongoing security monitoring program",
            ],
        ),
        (
            Controls,
            1,
            &[
                "Deploy network-based controls (proxies, firewalls, DLP)",
                "Implement host-based security controls",
                "Provide security awareness training",
                "Monitor and log AI tool usage",
            ],
        ),
        (
            Controls,
            2,
            &[
                "Configure identity integration with enterprise apps",
                "Review and validate vendor security controls",
                "Implement DLP to prevent sensitive data uploads",
                "Set up role-based access controls",
            ],
        ),
        (
            Controls,
            3,
            &[
                "Implement IAM policies for model endpoint access",
                "Build application layer authorization",
                "Apply input validation and output filtering",
                "Deploy guardrails and content filtering",
            ],
        ),
        (
            Controls,
            4,
            &[
                "Secure the fine-tuning pipeline",
                "Control access to training data",
                "Encrypt model artifacts",
                "Implement input/output sanitization",
            ],
        ),
        (
            Controls,
            5,
            &[
                "Deploy comprehensive model security controls",
                "Implement secure MLOps pipeline",
                "Apply content filtering during training and inference",
                "Conduct regular vulnerability scanning",
            ],
        ),
        (
            Resilience,
            1,
            &[
                "Assess provider availability SLAs",
                "Create backup plans for service outages",
                "Monitor usage quotas and billing",
                "Plan for service discontinuation scenarios",
            ],
        ),
        (
            Resilience,
            2,
            &[
                "Understand vendor availability and resilience",
                "Establish contingency processes",
                "Monitor API usage and costs",
                "Create vendor failure response plans",
            ],
        ),
        (
            Resilience,
            3,
            &[
                "Configure appropriate timeouts for requests",
                "Implement retry logic and circuit breakers",
                "Consider multi-region deployments",
                "Plan for model endpoint failures",
            ],
        ),
        (
            Resilience,
            4,
            &[
                "Ensure high availability for inference endpoints",
                "Backup access to training data",
                "Create model rollback mechanisms",
                "Plan for fine-tuning pipeline failures",
            ],
        ),
        (
            Resilience,
            5,
            &[
                "Build resilient training infrastructure",
                "Implement model checkpointing",
                "Create disaster recovery for model artifacts",
                "Plan for complete infrastructure failures",
            ],
        ),
    ];

    rows.into_iter()
        .map(|(key, scope, steps)| ((key, ScopeId::new(scope)), steps))
        .collect()
});
