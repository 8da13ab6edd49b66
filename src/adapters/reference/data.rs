//! Reference scoping matrix: five scopes by five disciplines.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::domain::catalog::{Discipline, DisciplineKey, Scope};
use crate::domain::foundation::ScopeId;

use super::DisciplineEntry;

pub(super) static SCOPES: Lazy<Vec<Scope>> = Lazy::new(|| {
    vec![
        Scope::new(
            1u32,
            "Consumer App",
            "Your business consumes a public third-party generative AI service, either at no-cost or paid. You don't own or see the training data or the model.",
            "An employee interacts with a generative AI chat application to generate ideas for an upcoming marketing campaign.",
        ),
        Scope::new(
            2u32,
            "Enterprise App",
            "Your business uses a third-party enterprise application that has generative AI features embedded within, with a business relationship established.",
            "You use a third-party enterprise scheduling application that has a generative AI capability to help draft meeting agendas.",
        ),
        Scope::new(
            3u32,
            "Pre-trained Models",
            "Your business builds its own application using an existing third-party generative AI foundation model through an API.",
            "You build a customer support chatbot that uses the Anthropic Claude foundation model through Amazon Bedrock APIs.",
        ),
        Scope::new(
            4u32,
            "Fine-tuned Models",
            "Your business refines an existing foundation model by fine-tuning it with data specific to your business.",
            "You build an application for marketing teams that creates materials specific to your products using a fine-tuned model.",
        ),
        Scope::new(
            5u32,
            "Self-trained Models",
            "Your business builds and trains a generative AI model from scratch using data that you own or acquire.",
            "You create a model trained exclusively on deep, industry-specific data to license to companies in that industry.",
        ),
    ]
});

pub(super) static DISCIPLINES: Lazy<Vec<DisciplineEntry>> = Lazy::new(|| {
    vec![
        entry(
            DisciplineKey::Governance,
            "Governance & Compliance",
            "The policies, procedures, and reporting needed to empower the business while minimizing risk.",
            [
                "Review terms of service and licensing agreements. Create policies prohibiting use of PII or confidential data. Implement user training on appropriate AI usage.",
                "Review enterprise agreements and data handling practices. Understand service provider's compliance posture. Monitor for changes in licensing terms.",
                "Establish data governance for prompt inputs and outputs. Implement logging for model inputs/outputs. Define acceptable use policies for your application.",
                "Classify the model according to the data used for fine-tuning. Implement strong data governance for training data. Document data lineage and model versioning.",
                "Comprehensive model governance program required. Data lineage tracking for all training data. Model versioning and rigorous testing throughout the lifecycle.",
            ],
        ),
        entry(
            DisciplineKey::Legal,
            "Legal & Privacy",
            "The specific regulatory, legal, and privacy requirements for using or creating generative AI solutions.",
            [
                "Understand provider's terms of service. Consider potential exposure of sensitive data in prompts. Treat all input and output as public information.",
                "Review enterprise agreements and data processing terms. Understand if your data is used to train models and how to opt out. Consider data residency requirements.",
                "Review both service provider and model provider legal terms. Consider indemnification policies for copyright content. Implement feedback mechanisms that protect sensitive data.",
                "Address GDPR 'right to erasure' challenges - deleting data requires model retraining. Consider copyright and IP implications of fine-tuning data.",
                "Develop your own terms of service for model usage. Address IP ownership questions for training data and outputs. Prepare for regulatory classification of your AI system.",
            ],
        ),
        entry(
            DisciplineKey::Risk,
            "Risk Management",
            "Identification of potential threats to generative AI solutions and recommended mitigations.",
            [
                "Assess third-party provider risks. Train users on generative AI threats. Monitor for sensitive data disclosure through prompts or outputs.",
                "Evaluate vendor security practices and SLAs. Protect API keys from unauthorized use. Assess risks around data reuse by providers.",
                "Implement threat modeling for your application. Protect against prompt injection attacks. Monitor for model abuse. Apply security mitigations from frameworks like MITRE ATLAS.",
                "Manage risks of data leakage from fine-tuned models. Consider model poisoning threats during fine-tuning. Careful selection of fine-tuning data.",
                "Complete threat modeling required. Data poisoning risks during training. Model security during development lifecycle. Implement content filtering and monitoring.",
            ],
        ),
        entry(
            DisciplineKey::Controls,
            "Controls",
            "The implementation of security controls that are used to mitigate risk.",
            [
                "Implement network-based controls (web proxies, firewalls, DLP). Deploy host-based controls (endpoint detection). Provide security awareness training.",
                "Configure identity integration with enterprise app. Review vendor security controls. Implement DLP to prevent upload of highly sensitive data.",
                "Implement IAM policies to restrict access to model endpoints. Build application layer authorization. Apply input validation, output filtering, and guardrails.",
                "Secure the fine-tuning pipeline. Control access to training data. Encrypt model artifacts. Implement input/output sanitization.",
                "Comprehensive model security controls. Secure MLOps pipeline. Content filtering during training and inference. Vulnerability scanning and testing.",
            ],
        ),
        entry(
            DisciplineKey::Resilience,
            "Resilience",
            "How to architect generative AI solutions to maintain availability and meet business SLAs.",
            [
                "Assess provider's availability SLAs. Have backup plans for service outages. Consider usage quotas and billing impacts.",
                "Understand vendor's availability and resilience posture. Establish contingency processes. Monitor API usage and costs.",
                "Configure appropriate timeouts for complex prompts. Implement retry logic and circuit breaker patterns. Consider multi-region deployments for critical workloads.",
                "High availability for inference endpoints. Backup access to training data. Rollback mechanisms for model updates.",
                "Resilient training infrastructure. Model checkpointing during training. Disaster recovery for model artifacts and training data.",
            ],
        ),
    ]
});

/// Builds an entry whose considerations are keyed by scopes 1 through 5.
fn entry(
    key: DisciplineKey,
    name: &str,
    description: &str,
    considerations: [&str; 5],
) -> DisciplineEntry {
    let considerations: BTreeMap<ScopeId, String> = considerations
        .iter()
        .zip(1u32..)
        .map(|(text, scope)| (ScopeId::new(scope), text.to_string()))
        .collect();

    DisciplineEntry {
        discipline: Discipline::new(key.id(), name, description),
        considerations,
    }
}
