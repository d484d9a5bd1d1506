//! Shared fixtures for integration tests.
//!
//! Provides realistic object-form payloads for the main record types and
//! a scratch directory to write them to.

use anyhow::Result;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

/// Integration test context providing a scratch directory.
pub struct IntegrationTestContext {
    /// Temporary directory for fixture files
    pub temp_dir: TempDir,
}

impl IntegrationTestContext {
    /// Creates a new test context.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Writes `object` as JSON and returns its path.
    pub fn write_fixture(&self, name: &str, object: &Value) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(format!("{name}.json"));
        std::fs::write(&path, serde_json::to_vec_pretty(object)?)?;
        Ok(path)
    }
}

/// Object-form fixtures keyed by full message name.
pub fn fixtures() -> Vec<(&'static str, Value)> {
    vec![
        (
            "viam.app.v1.Organization",
            json!({
                "id": "org1",
                "name": "Acme",
                "createdOn": { "seconds": 1_700_000_000, "nanos": 0 },
                "publicNamespace": "acme",
                "defaultRegion": "us-east",
                "cid": "C-1"
            }),
        ),
        (
            "viam.app.v1.Location",
            json!({
                "id": "loc1",
                "name": "Garage",
                "parentLocationId": "root",
                "auth": {
                    "secret": "legacy",
                    "locationId": "loc1",
                    "secrets": [
                        { "id": "s1", "secret": "abc", "state": 1 },
                        { "id": "s2", "secret": "def", "state": 2 }
                    ]
                },
                "organizations": [
                    { "organizationId": "org1", "primary": true },
                    { "organizationId": "org2", "primary": false }
                ],
                "createdOn": { "seconds": 5, "nanos": 6 },
                "robotCount": 3,
                "config": { "region": "us-east" }
            }),
        ),
        (
            "viam.app.v1.RobotPart",
            json!({
                "id": "p1",
                "name": "main",
                "dnsName": "main-1",
                "secret": "x",
                "robot": "r1",
                "locationId": "loc1",
                "robotConfig": { "components": [ { "name": "arm", "type": "arm" } ], "debug": false },
                "mainPart": true,
                "fqdn": "main.loc1.viam.cloud",
                "localFqdn": "main.loc1.local.viam.cloud",
                "secrets": [ { "id": "s1", "secret": "abc", "state": 1 } ]
            }),
        ),
        (
            "viam.app.v1.Fragment",
            json!({
                "id": "f1",
                "name": "base",
                "fragment": { "services": [] },
                "organizationOwner": "org1",
                "public": true,
                "organizationName": "Acme",
                "robotPartCount": 12,
                "organizationCount": 2,
                "onlyUsedByOwner": false
            }),
        ),
        (
            "viam.app.v1.Module",
            json!({
                "moduleId": "acme:servo",
                "name": "servo",
                "visibility": 2,
                "versions": [
                    {
                        "version": "0.0.1",
                        "files": [ { "platform": "linux/amd64", "uploadedAt": { "seconds": 10, "nanos": 0 } } ],
                        "models": [ { "api": "rdk:component:servo", "model": "acme:servo:fast" } ],
                        "entrypoint": "bin/servo"
                    }
                ],
                "url": "https://example.com",
                "description": "A servo",
                "models": [ { "api": "rdk:component:servo", "model": "acme:servo:fast" } ],
                "totalRobotUsage": 9_000_000_000_i64,
                "totalOrganizationUsage": 4,
                "organizationId": "org1",
                "entrypoint": "bin/servo",
                "publicNamespace": "acme"
            }),
        ),
        (
            "viam.app.v1.UploadModuleFileRequest",
            json!({ "moduleFileInfo": { "moduleId": "acme:servo", "version": "0.0.2", "platform": "any" } }),
        ),
        (
            "viam.app.v1.UploadModuleFileRequest",
            json!({ "file": "AAECAwQ=" }),
        ),
        (
            "viam.common.v1.GetGeometriesResponse",
            json!({
                "geometries": [
                    {
                        "center": { "x": 1.0, "y": 2.0, "z": 3.0, "oZ": 1.0, "theta": 90.0 },
                        "sphere": { "radiusMm": 15.0 },
                        "label": "horn"
                    },
                    {
                        "capsule": { "radiusMm": 5.0, "lengthMm": 30.0 },
                        "label": "arm"
                    }
                ]
            }),
        ),
        (
            "viam.component.servo.v1.MoveRequest",
            json!({ "name": "servo1", "angleDeg": 45, "extra": { "slow": true } }),
        ),
    ]
}
