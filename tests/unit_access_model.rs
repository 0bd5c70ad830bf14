use staffdesk_auth::{
    RouteAccessMap, can_access_route, get_role_permissions, has_all_permissions,
    has_any_permission, has_permission, required_permission, roles_with_permission,
};
use staffdesk_core::{Permission, Role, is_admin, is_management, is_staff};

#[test]
fn test_missing_role_holds_nothing() {
    for permission in Permission::ALL {
        assert!(!has_permission(None, permission));
    }
    assert!(get_role_permissions(None).is_empty());
    assert!(!has_any_permission(None, &Permission::ALL));
}

#[test]
fn test_has_permission_agrees_with_permission_set() {
    for role in Role::ALL {
        let set = get_role_permissions(role);
        for permission in Permission::ALL {
            assert_eq!(
                has_permission(role, permission),
                set.contains(&permission),
                "{role} / {permission}"
            );
        }
    }
}

#[test]
fn test_any_and_all_match_single_checks() {
    let list = [
        Permission::ViewLabs,
        Permission::ApproveLoan,
        Permission::ManageSettings,
    ];

    for role in Role::ALL {
        assert_eq!(
            has_any_permission(role, &list),
            list.iter().any(|&p| has_permission(role, p))
        );
        assert_eq!(
            has_all_permissions(role, &list),
            list.iter().all(|&p| has_permission(role, p))
        );
    }
}

#[test]
fn test_empty_permission_list() {
    for role in Role::ALL {
        assert!(!has_any_permission(role, &[]));
        assert!(has_all_permissions(role, &[]));
    }
    assert!(has_all_permissions(None, &[]));
}

#[test]
fn test_super_admin_holds_everything() {
    assert_eq!(
        get_role_permissions(Role::SuperAdmin).len(),
        Permission::ALL.len()
    );
}

#[test]
fn test_every_role_views_dashboard() {
    for role in Role::ALL {
        assert!(has_permission(role, Permission::ViewDashboard), "{role}");
    }
}

#[test]
fn test_approval_permissions_are_narrow() {
    assert_eq!(
        roles_with_permission(Permission::ApproveAsChief),
        vec![Role::SuperAdmin, Role::ChiefInstructor]
    );
    assert_eq!(
        roles_with_permission(Permission::ApproveAsPrincipal),
        vec![Role::SuperAdmin, Role::Principal]
    );
}

#[test]
fn test_instructor_family_shares_grants() {
    let instructor = get_role_permissions(Role::Instructor);
    assert_eq!(get_role_permissions(Role::CraftInstructor), instructor);
    assert_eq!(get_role_permissions(Role::AssistantInstructor), instructor);
}

#[test]
fn test_route_access_matches_required_permission() {
    for (route, permission) in RouteAccessMap::global().routes() {
        assert_eq!(required_permission(route), Some(permission));
        for role in Role::ALL {
            assert_eq!(
                can_access_route(role, route),
                has_permission(role, permission),
                "{role} on {route}"
            );
        }
        assert!(!can_access_route(None, route));
    }
}

#[test]
fn test_unregistered_route_denied_for_all() {
    for role in Role::ALL {
        assert!(!can_access_route(role, "/dashboard/unknown"));
        assert!(!can_access_route(role, ""));
    }
}

#[test]
fn test_role_classes() {
    for role in Role::ALL {
        let role = Some(role);
        if is_admin(role) {
            assert!(is_management(role));
        }
        assert_ne!(is_management(role), is_staff(role));
    }

    assert!(is_admin(Some(Role::SuperAdmin)));
    assert!(!is_admin(Some(Role::Principal)));
    assert!(is_management(Some(Role::GeneralShakha)));
    assert!(is_staff(Some(Role::ChiefInstructor)));

    assert!(!is_admin(None));
    assert!(!is_management(None));
    assert!(!is_staff(None));
}
