// ── Resource controller ──
//
// The five generic operations over any `Resource`. Every mutating
// operation re-resolves identity with a fresh read immediately before
// acting: that costs one extra round trip, but the protocol has no
// transaction primitive and no optimistic-concurrency token, so a
// stale or duplicate match is the bigger hazard. The window between
// that read and the following write cannot be closed from the client
// side; it is a protocol limitation.

use tracing::debug;

use rosly_api::{Client, Connection};

use crate::command::{CommandMode, build_command};
use crate::error::Error;
use crate::mapper::{Attributes, from_record, to_attributes, validate};
use crate::resource::Resource;

/// The main entry point for consumers: CRUD over typed resources,
/// generic over both the transport and the resource type.
///
/// The controller holds no resource state of its own; instances passed
/// in are never cached or retained beyond one call.
#[derive(Debug)]
pub struct Controller<C> {
    client: Client<C>,
}

impl<C: Connection> Controller<C> {
    /// Wrap an existing client.
    pub fn new(client: Client<C>) -> Self {
        Self { client }
    }

    /// Wrap a raw connection directly.
    pub fn from_connection(conn: C) -> Self {
        Self::new(Client::new(conn))
    }

    /// The underlying client, for ad-hoc commands.
    pub fn client(&self) -> &Client<C> {
        &self.client
    }

    /// Close the underlying connection.
    pub fn close(&self) {
        self.client.close();
    }

    /// Create `resource` on the device and return the identity the
    /// device assigned to it.
    ///
    /// Fails with [`Error::AlreadyExists`] if an object already
    /// matches the resource's non-empty fields, and with
    /// [`Error::EmptyReply`] if the device accepts the command but
    /// returns no identity.
    pub fn create<R: Resource>(&self, resource: &R) -> Result<String, Error> {
        debug!(resource = ?resource, "create");

        validate(resource)?;

        if self.exists(resource)? {
            return Err(Error::AlreadyExists { resource: R::NAME });
        }

        let attrs = to_attributes(resource)?;
        let command = build_command(R::CREATE_PATH, None, &attrs, CommandMode::Mutate);
        let reply = self.client.run(&command)?;

        match reply.created_id() {
            Some(id) => Ok(id.to_owned()),
            None => Err(Error::EmptyReply),
        }
    }

    /// Resolve `resource` against current device state and return a
    /// freshly populated instance.
    ///
    /// A non-empty identity addresses the object directly; otherwise
    /// the lookup is an exact-match query over all non-empty fields.
    /// Zero matches fail [`Error::NotFound`]; two or more fail
    /// [`Error::Ambiguous`] -- the first match is never silently
    /// picked.
    pub fn read<R: Resource>(&self, resource: &R) -> Result<R, Error> {
        debug!(resource = ?resource, "read");

        validate(resource)?;

        // A non-empty identity is enough on its own to address the object.
        let attrs = if resource.id().is_empty() {
            to_attributes(resource)?
        } else {
            Attributes::from([(R::ID_ATTR.to_owned(), resource.id().to_owned())])
        };

        let command = build_command(R::READ_PATH, None, &attrs, CommandMode::Query);
        let reply = self.client.run(&command)?;

        match reply.records.as_slice() {
            [] => Err(Error::NotFound { resource: R::NAME }),
            [record] => from_record(record),
            records => Err(Error::Ambiguous {
                resource: R::NAME,
                matches: records.len(),
            }),
        }
    }

    /// Replace the object matching `old` with the field values of
    /// `new`.
    ///
    /// The identity is re-resolved from current device state rather
    /// than trusting whatever `old` carries. Success means the
    /// transport accepted the command; no read-back verifies that the
    /// change was applied.
    pub fn update<R: Resource>(&self, old: &R, new: &R) -> Result<(), Error> {
        debug!(old = ?old, new = ?new, "update");

        validate(old)?;
        validate(new)?;

        let current = self.read(old)?;

        let mut next = new.clone();
        next.set_id(current.id().to_owned());

        let attrs = to_attributes(&next)?;
        let command = build_command(R::UPDATE_PATH, None, &attrs, CommandMode::Mutate);
        self.client.run(&command)?;

        Ok(())
    }

    /// Delete the object matching `resource`.
    ///
    /// Deletion is identity-only on the wire, so the identity is
    /// resolved with a fresh read first; [`Error::NotFound`]
    /// propagates if nothing matches.
    pub fn delete<R: Resource>(&self, resource: &R) -> Result<(), Error> {
        debug!(resource = ?resource, "delete");

        validate(resource)?;

        let current = self.read(resource)?;

        let attrs = Attributes::from([(R::ID_ATTR.to_owned(), current.id().to_owned())]);
        let command = build_command(R::DELETE_PATH, None, &attrs, CommandMode::Mutate);
        self.client.run(&command)?;

        Ok(())
    }

    /// Check whether exactly one object matches `resource`'s non-empty
    /// fields.
    ///
    /// The reply is restricted to the identity attribute; two or more
    /// matches fail [`Error::Ambiguous`].
    pub fn exists<R: Resource>(&self, resource: &R) -> Result<bool, Error> {
        debug!(resource = ?resource, "exists");

        validate(resource)?;

        let attrs = to_attributes(resource)?;
        let command = build_command(R::READ_PATH, Some(&[R::ID_ATTR]), &attrs, CommandMode::Query);
        let reply = self.client.run(&command)?;

        match reply.records.len() {
            0 => Ok(false),
            1 => Ok(true),
            matches => Err(Error::Ambiguous {
                resource: R::NAME,
                matches,
            }),
        }
    }
}
