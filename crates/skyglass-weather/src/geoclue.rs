//! GeoClue2 client over the D-Bus system bus.

use crate::location::LocationRequest;
use crate::types::{Coordinates, LocationError};
use futures::StreamExt;
use zbus::zvariant::{ObjectPath, OwnedObjectPath};
use zbus::{proxy, Connection};

const DESKTOP_ID: &str = "skyglass";

// GClueAccuracyLevel values
const ACCURACY_LEVEL_CITY: u32 = 4;
const ACCURACY_LEVEL_EXACT: u32 = 8;

#[proxy(
    interface = "org.freedesktop.GeoClue2.Manager",
    default_service = "org.freedesktop.GeoClue2",
    default_path = "/org/freedesktop/GeoClue2/Manager",
    gen_blocking = false
)]
trait Manager {
    fn get_client(&self) -> zbus::Result<OwnedObjectPath>;
}

#[proxy(
    interface = "org.freedesktop.GeoClue2.Client",
    default_service = "org.freedesktop.GeoClue2",
    gen_blocking = false
)]
trait Client {
    fn start(&self) -> zbus::Result<()>;

    fn stop(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn set_desktop_id(&self, id: &str) -> zbus::Result<()>;

    #[zbus(property)]
    fn set_requested_accuracy_level(&self, level: u32) -> zbus::Result<()>;

    #[zbus(signal)]
    fn location_updated(
        &self,
        old_location: ObjectPath<'_>,
        new_location: ObjectPath<'_>,
    ) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.freedesktop.GeoClue2.Location",
    default_service = "org.freedesktop.GeoClue2",
    gen_blocking = false
)]
trait Location {
    #[zbus(property)]
    fn latitude(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn longitude(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn accuracy(&self) -> zbus::Result<f64>;
}

impl From<zbus::Error> for LocationError {
    fn from(err: zbus::Error) -> Self {
        match &err {
            zbus::Error::MethodError(name, _, _) => classify_error_name(name.as_str(), err.to_string()),
            zbus::Error::FDO(fdo) => match &**fdo {
                zbus::fdo::Error::AccessDenied(_) => LocationError::PermissionDenied,
                zbus::fdo::Error::ServiceUnknown(_) | zbus::fdo::Error::NameHasNoOwner(_) => {
                    LocationError::Unavailable(err.to_string())
                }
                _ => LocationError::Other(err.to_string()),
            },
            zbus::Error::InputOutput(_) | zbus::Error::Address(_) => {
                LocationError::Unavailable(err.to_string())
            }
            _ => LocationError::Other(err.to_string()),
        }
    }
}

/// Classify a D-Bus error reply by its error name.
fn classify_error_name(name: &str, detail: String) -> LocationError {
    match name {
        "org.freedesktop.DBus.Error.AccessDenied" => LocationError::PermissionDenied,
        "org.freedesktop.DBus.Error.ServiceUnknown"
        | "org.freedesktop.DBus.Error.NameHasNoOwner"
        | "org.freedesktop.DBus.Error.Spawn.ServiceNotFound" => LocationError::Unavailable(detail),
        _ => LocationError::Other(detail),
    }
}

/// Ask GeoClue for one position fix. The caller bounds this with the request timeout.
pub(crate) async fn locate(request: &LocationRequest) -> Result<Coordinates, LocationError> {
    let connection = Connection::system().await?;

    let manager = ManagerProxy::new(&connection).await?;
    let client_path = manager.get_client().await?;
    tracing::debug!("GeoClue client at {}", client_path.as_str());

    let client = ClientProxy::builder(&connection)
        .path(client_path)?
        .build()
        .await?;

    let accuracy_level = if request.high_accuracy {
        ACCURACY_LEVEL_EXACT
    } else {
        ACCURACY_LEVEL_CITY
    };
    client.set_desktop_id(DESKTOP_ID).await?;
    client.set_requested_accuracy_level(accuracy_level).await?;

    // Subscribe before starting so the first update can't be missed
    let mut updates = client.receive_location_updated().await?;
    client.start().await?;

    let update = updates.next().await.ok_or_else(|| {
        LocationError::Unavailable("GeoClue stopped sending location updates".to_string())
    })?;
    let args = update.args()?;

    let location = LocationProxy::builder(&connection)
        .path(args.new_location().to_owned())?
        .build()
        .await?;

    let coordinates = Coordinates {
        latitude: location.latitude().await?,
        longitude: location.longitude().await?,
        accuracy: location.accuracy().await.ok(),
    };

    if let Err(e) = client.stop().await {
        tracing::debug!("Failed to stop GeoClue client: {}", e);
    }

    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fdo(err: zbus::fdo::Error) -> LocationError {
        LocationError::from(zbus::Error::FDO(Box::new(err)))
    }

    #[test]
    fn test_access_denied_is_permission_denied() {
        assert!(matches!(
            fdo(zbus::fdo::Error::AccessDenied("not allowed".into())),
            LocationError::PermissionDenied
        ));
        assert!(matches!(
            classify_error_name("org.freedesktop.DBus.Error.AccessDenied", String::new()),
            LocationError::PermissionDenied
        ));
    }

    #[test]
    fn test_missing_service_is_unavailable() {
        assert!(matches!(
            fdo(zbus::fdo::Error::ServiceUnknown("org.freedesktop.GeoClue2".into())),
            LocationError::Unavailable(_)
        ));
        assert!(matches!(
            fdo(zbus::fdo::Error::NameHasNoOwner("org.freedesktop.GeoClue2".into())),
            LocationError::Unavailable(_)
        ));
        assert!(matches!(
            classify_error_name(
                "org.freedesktop.DBus.Error.Spawn.ServiceNotFound",
                "geoclue.service not found".to_string()
            ),
            LocationError::Unavailable(ref detail) if detail == "geoclue.service not found"
        ));
    }

    #[test]
    fn test_no_bus_is_unavailable() {
        let err = LocationError::from(zbus::Error::Address("no system bus".to_string()));
        assert!(matches!(err, LocationError::Unavailable(_)));
    }

    #[test]
    fn test_other_failures_are_unknown() {
        assert!(matches!(
            classify_error_name("org.freedesktop.GeoClue2.Error.Failed", "boom".to_string()),
            LocationError::Other(ref detail) if detail == "boom"
        ));
        assert!(matches!(
            fdo(zbus::fdo::Error::Failed("boom".into())),
            LocationError::Other(_)
        ));
    }
}
