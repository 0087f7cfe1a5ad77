//! Claim ledger
//!
//! Append-only sequence of claims indexed by `ClaimId`, starting at 1 and
//! independent of the policy sequence. Every check runs before the ledger is
//! touched, so a failed call leaves no claim and consumes no id.

use chrono::Utc;
use std::cmp::Ordering;
use tracing::{debug, info};

use core_kernel::{ClaimId, Money, PartyId, PolicyId};
use domain_policy::Policy;

use crate::claim::{Claim, ClaimStatus, DisputeRuling};
use crate::error::ClaimError;
use crate::events::ClaimEvent;
use crate::resolution::{Payout, Resolution, ResolutionPlan};

#[derive(Debug, Clone, Default)]
pub struct ClaimLedger {
    claims: Vec<Claim>,
    events: Vec<ClaimEvent>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a claim against `policy`
    ///
    /// # Errors
    ///
    /// Checks run in order: policy active, claimant owns the policy, amount
    /// positive and in the policy currency, amount within coverage.
    pub fn file(
        &mut self,
        policy: &Policy,
        claimant: PartyId,
        claim_amount: Money,
        reason: impl Into<String>,
    ) -> Result<ClaimId, ClaimError> {
        let policy_id = policy.id();

        if !policy.is_active() {
            return Err(ClaimError::PolicyInactive(policy_id));
        }
        if !policy.is_owned_by(claimant) {
            return Err(ClaimError::NotPolicyHolder { claimant, policy_id });
        }
        if !claim_amount.is_positive() {
            return Err(ClaimError::InvalidClaimAmount(claim_amount.to_string()));
        }

        let coverage = policy.coverage_amount();
        let ordering = claim_amount.checked_cmp(&coverage).map_err(|_| {
            ClaimError::CurrencyMismatch {
                expected: coverage.currency().to_string(),
                actual: claim_amount.currency().to_string(),
            }
        })?;
        if ordering == Ordering::Greater {
            return Err(ClaimError::ClaimExceedsCoverage {
                claim_amount: claim_amount.to_string(),
                coverage: coverage.to_string(),
            });
        }

        let id = ClaimId::from_index(self.claims.len());
        let claim = Claim::new(id, policy_id, claimant, claim_amount, reason.into());

        info!(claim_id = %id, %policy_id, farmer = %claimant, amount = %claim_amount, "claim filed");
        self.events.push(ClaimEvent::ClaimFiled {
            claim_id: id,
            policy_id,
            farmer: claimant,
            claim_amount: claim_amount.amount(),
            reason: claim.reason().to_string(),
            timestamp: claim.filed_at(),
        });
        self.claims.push(claim);
        Ok(id)
    }

    /// Looks up a claim
    pub fn get(&self, id: ClaimId) -> Result<&Claim, ClaimError> {
        id.index()
            .and_then(|i| self.claims.get(i))
            .ok_or(ClaimError::ClaimNotFound(id))
    }

    /// Validates a resolution step against the claim's current state
    ///
    /// # Errors
    ///
    /// - `ClaimNotFound` for an unused id
    /// - `ClaimNotPending` if the claim is not in the step's required status
    /// - `DisputeAlreadyResolved` if an auditor already ruled on the claim
    pub fn plan_resolution(
        &self,
        claim_id: ClaimId,
        resolver: PartyId,
        resolution: Resolution,
    ) -> Result<ResolutionPlan, ClaimError> {
        let claim = self.get(claim_id)?;
        let required = resolution.required_status();

        if claim.status() != required {
            debug!(%claim_id, %required, actual = %claim.status(), "resolution refused");
            return Err(ClaimError::ClaimNotPending {
                claim_id,
                required,
                actual: claim.status(),
            });
        }
        if matches!(resolution, Resolution::Dispute { .. }) && claim.dispute().is_some() {
            return Err(ClaimError::DisputeAlreadyResolved(claim_id));
        }

        let payout = resolution.pays_out().then(|| Payout {
            to: claim.farmer(),
            amount: claim.claim_amount(),
        });

        Ok(ResolutionPlan {
            claim_id,
            resolver,
            resolution,
            from: claim.status(),
            payout,
        })
    }

    /// Applies a plan produced by [`ClaimLedger::plan_resolution`]
    ///
    /// # Errors
    ///
    /// `ClaimNotPending` if the claim moved since the plan was made.
    pub fn apply_resolution(&mut self, plan: ResolutionPlan) -> Result<&Claim, ClaimError> {
        let claim = plan
            .claim_id
            .index()
            .and_then(|i| self.claims.get_mut(i))
            .ok_or(ClaimError::ClaimNotFound(plan.claim_id))?;

        if claim.status() != plan.from {
            return Err(ClaimError::ClaimNotPending {
                claim_id: plan.claim_id,
                required: plan.from,
                actual: claim.status(),
            });
        }

        let target = plan.to_status();
        claim.update_status(target)?;
        let now = claim.updated_at();
        let payout_amount = plan.payout.map(|p| p.amount.amount());

        let event = match plan.resolution {
            Resolution::Approve => {
                claim.record_decision(plan.resolver);
                ClaimEvent::ClaimApproved {
                    claim_id: plan.claim_id,
                    approved_by: plan.resolver,
                    payout_amount: claim.claim_amount().amount(),
                    timestamp: now,
                }
            }
            Resolution::Reject => {
                claim.record_decision(plan.resolver);
                ClaimEvent::ClaimRejected {
                    claim_id: plan.claim_id,
                    rejected_by: plan.resolver,
                    timestamp: now,
                }
            }
            Resolution::Dispute { farmer_favored } => {
                claim.record_dispute(DisputeRuling {
                    auditor: plan.resolver,
                    farmer_favored,
                    ruled_at: now,
                });
                ClaimEvent::DisputeResolved {
                    claim_id: plan.claim_id,
                    auditor: plan.resolver,
                    farmer_favored,
                    payout_amount,
                    timestamp: now,
                }
            }
        };

        info!(
            claim_id = %plan.claim_id,
            from = %plan.from,
            to = %target,
            resolver = %plan.resolver,
            "claim {}",
            event.event_type()
        );
        self.events.push(event);
        Ok(claim)
    }

    /// Returns every claim filed against `policy_id`, in filing order
    pub fn claims_for_policy(&self, policy_id: PolicyId) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(move |c| c.policy_id() == policy_id)
    }

    /// Returns every claim currently in `status`
    pub fn claims_with_status(&self, status: ClaimStatus) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(move |c| c.status() == status)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<ClaimEvent> {
        std::mem::take(&mut self.events)
    }
}
