//! Tests for the role registry

use core_kernel::PartyId;
use domain_roles::{Role, RoleError, RoleEvent, RoleRegistry};

// ============================================================================
// Assignment Tests
// ============================================================================

mod assignment_tests {
    use super::*;

    #[test]
    fn test_insurer_assigns_every_role() {
        let insurer = PartyId::new();
        let mut registry = RoleRegistry::new(insurer);

        let farmer = PartyId::new();
        let auditor = PartyId::new();
        let second_insurer = PartyId::new();

        registry.assign_role(insurer, farmer, Role::Farmer).unwrap();
        registry.assign_role(insurer, auditor, Role::Auditor).unwrap();
        registry.assign_role(insurer, second_insurer, Role::Insurer).unwrap();

        assert_eq!(registry.role_of(farmer), Role::Farmer);
        assert_eq!(registry.role_of(auditor), Role::Auditor);
        assert!(registry.has_role(second_insurer, Role::Insurer));
    }

    #[test]
    fn test_newly_appointed_insurer_can_assign() {
        let deployer = PartyId::new();
        let mut registry = RoleRegistry::new(deployer);
        let appointed = PartyId::new();
        let farmer = PartyId::new();

        registry.assign_role(deployer, appointed, Role::Insurer).unwrap();
        registry.assign_role(appointed, farmer, Role::Farmer).unwrap();

        assert_eq!(registry.role_of(farmer), Role::Farmer);
    }

    #[test]
    fn test_reassignment_replaces_role() {
        let insurer = PartyId::new();
        let mut registry = RoleRegistry::new(insurer);
        let party = PartyId::new();

        registry.assign_role(insurer, party, Role::Farmer).unwrap();
        registry.assign_role(insurer, party, Role::Auditor).unwrap();
        assert_eq!(registry.role_of(party), Role::Auditor);

        registry.assign_role(insurer, party, Role::Unset).unwrap();
        assert_eq!(registry.role_of(party), Role::Unset);
    }

    #[test]
    fn test_non_insurers_cannot_assign() {
        let insurer = PartyId::new();
        let mut registry = RoleRegistry::new(insurer);
        let farmer = PartyId::new();
        let auditor = PartyId::new();
        let stranger = PartyId::new();
        registry.assign_role(insurer, farmer, Role::Farmer).unwrap();
        registry.assign_role(insurer, auditor, Role::Auditor).unwrap();
        registry.take_events();

        for caller in [farmer, auditor, stranger] {
            let result = registry.assign_role(caller, caller, Role::Insurer);
            assert!(matches!(
                result,
                Err(RoleError::Unauthorized { required: Role::Insurer, .. })
            ));
        }

        assert_eq!(registry.role_of(farmer), Role::Farmer);
        assert_eq!(registry.role_of(auditor), Role::Auditor);
        assert_eq!(registry.role_of(stranger), Role::Unset);
        assert!(registry.take_events().is_empty());
    }

    #[test]
    fn test_unauthorized_message_names_roles() {
        let mut registry = RoleRegistry::new(PartyId::new());
        let stranger = PartyId::new();

        let error = registry
            .assign_role(stranger, stranger, Role::Farmer)
            .unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Unset"));
        assert!(message.contains("Insurer"));
    }
}

// ============================================================================
// Event Tests
// ============================================================================

mod event_tests {
    use super::*;

    #[test]
    fn test_assignment_records_previous_role() {
        let insurer = PartyId::new();
        let mut registry = RoleRegistry::new(insurer);
        let party = PartyId::new();

        registry.assign_role(insurer, party, Role::Farmer).unwrap();
        registry.assign_role(insurer, party, Role::Auditor).unwrap();

        let events = registry.take_events();
        assert_eq!(events.len(), 2);
        match &events[1] {
            RoleEvent::RoleAssigned { party_id, previous, role, assigned_by, .. } => {
                assert_eq!(*party_id, party);
                assert_eq!(*previous, Role::Farmer);
                assert_eq!(*role, Role::Auditor);
                assert_eq!(*assigned_by, insurer);
            }
        }
        assert_eq!(events[0].event_type(), "RoleAssigned");
        assert!(registry.take_events().is_empty());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Auditor).unwrap();
        assert_eq!(json, "\"auditor\"");
        let parsed: Role = serde_json::from_str("\"farmer\"").unwrap();
        assert_eq!(parsed, Role::Farmer);
    }
}
