//! Registration of every message compiled into this crate.

use super::Catalog;
use crate::proto::viam::app::v1 as app;
use crate::proto::viam::common::v1 as common;
use crate::proto::viam::component::servo::v1 as servo;

macro_rules! register {
    ($catalog:ident, $module:ident, [$($ty:ident),* $(,)?]) => {
        $( $catalog.register::<$module::$ty>(); )*
    };
}

pub(super) fn register_app(catalog: &mut Catalog) {
    register!(catalog, app, [
        Robot,
        RobotPart,
        RobotPartHistoryEntry,
        // organizations
        ListOrganizationsRequest,
        Organization,
        OrganizationMember,
        ListOrganizationsResponse,
        OrganizationInvite,
        CreateOrganizationRequest,
        CreateOrganizationResponse,
        GetOrganizationRequest,
        GetOrganizationResponse,
        GetOrganizationNamespaceAvailabilityRequest,
        GetOrganizationNamespaceAvailabilityResponse,
        UpdateOrganizationRequest,
        UpdateOrganizationResponse,
        DeleteOrganizationRequest,
        DeleteOrganizationResponse,
        ListOrganizationMembersRequest,
        ListOrganizationMembersResponse,
        CreateOrganizationInviteRequest,
        CreateOrganizationInviteResponse,
        UpdateOrganizationInviteAuthorizationsRequest,
        UpdateOrganizationInviteAuthorizationsResponse,
        DeleteOrganizationInviteRequest,
        DeleteOrganizationInviteResponse,
        ResendOrganizationInviteRequest,
        ResendOrganizationInviteResponse,
        DeleteOrganizationMemberRequest,
        DeleteOrganizationMemberResponse,
        // locations
        LocationOrganization,
        LocationAuth,
        StorageConfig,
        Location,
        SharedSecret,
        CreateLocationRequest,
        CreateLocationResponse,
        GetLocationRequest,
        GetLocationResponse,
        UpdateLocationRequest,
        UpdateLocationResponse,
        DeleteLocationRequest,
        DeleteLocationResponse,
        ListLocationsRequest,
        ShareLocationRequest,
        ShareLocationResponse,
        UnshareLocationRequest,
        UnshareLocationResponse,
        ListLocationsResponse,
        CreateLocationSecretRequest,
        CreateLocationSecretResponse,
        DeleteLocationSecretRequest,
        DeleteLocationSecretResponse,
        LocationAuthRequest,
        LocationAuthResponse,
        // robots and parts
        GetRobotRequest,
        GetRoverRentalRobotsRequest,
        RoverRentalRobot,
        GetRoverRentalRobotsResponse,
        GetRobotResponse,
        GetRobotPartsRequest,
        GetRobotPartsResponse,
        GetRobotPartRequest,
        GetRobotPartResponse,
        GetRobotPartLogsRequest,
        LogEntry,
        GetRobotPartLogsResponse,
        TailRobotPartLogsRequest,
        TailRobotPartLogsResponse,
        GetRobotPartHistoryRequest,
        GetRobotPartHistoryResponse,
        UpdateRobotPartRequest,
        UpdateRobotPartResponse,
        NewRobotPartRequest,
        NewRobotPartResponse,
        DeleteRobotPartRequest,
        DeleteRobotPartResponse,
        // fragments
        Fragment,
        ListFragmentsRequest,
        ListFragmentsResponse,
        GetFragmentRequest,
        GetFragmentResponse,
        CreateFragmentRequest,
        CreateFragmentResponse,
        UpdateFragmentRequest,
        UpdateFragmentResponse,
        DeleteFragmentRequest,
        DeleteFragmentResponse,
        ListRobotsRequest,
        ListRobotsResponse,
        NewRobotRequest,
        NewRobotResponse,
        UpdateRobotRequest,
        UpdateRobotResponse,
        DeleteRobotRequest,
        DeleteRobotResponse,
        MarkPartAsMainRequest,
        MarkPartAsMainResponse,
        MarkPartForRestartRequest,
        MarkPartForRestartResponse,
        CreateRobotPartSecretRequest,
        CreateRobotPartSecretResponse,
        DeleteRobotPartSecretRequest,
        DeleteRobotPartSecretResponse,
        // authorization
        Authorization,
        AddRoleRequest,
        AddRoleResponse,
        RemoveRoleRequest,
        RemoveRoleResponse,
        ChangeRoleRequest,
        ChangeRoleResponse,
        ListAuthorizationsRequest,
        ListAuthorizationsResponse,
        CheckPermissionsRequest,
        AuthorizedPermissions,
        CheckPermissionsResponse,
        // modules
        CreateModuleRequest,
        CreateModuleResponse,
        UpdateModuleRequest,
        UpdateModuleResponse,
        Model,
        ModuleFileInfo,
        UploadModuleFileRequest,
        UploadModuleFileResponse,
        GetModuleRequest,
        GetModuleResponse,
        Module,
        VersionHistory,
        Uploads,
        ListModulesRequest,
        ListModulesResponse,
        // users and keys
        GetUserIdByEmailRequest,
        GetUserIdByEmailResponse,
        ListOrganizationsByUserRequest,
        OrgDetails,
        ListOrganizationsByUserResponse,
        CreateKeyRequest,
        CreateKeyResponse,
    ]);
}

pub(super) fn register_components(catalog: &mut Catalog) {
    register!(catalog, common, [
        DoCommandRequest,
        DoCommandResponse,
        Pose,
        Vector3,
        Sphere,
        Capsule,
        RectangularPrism,
        Geometry,
        GetGeometriesRequest,
        GetGeometriesResponse,
    ]);
    register!(catalog, servo, [
        MoveRequest,
        MoveResponse,
        GetPositionRequest,
        GetPositionResponse,
        StopRequest,
        StopResponse,
        Status,
        IsMovingRequest,
        IsMovingResponse,
    ]);
}
