//! # Declarative Client Generation
//!
//! [`resource_client!`](crate::resource_client) turns an operation table into a
//! typed client. Each row names the generated method, the operation it
//! dispatches, the path parameters it requires and, optionally, its payload
//! type:
//!
//! ```rust,ignore
//! resource_client! {
//!     /// Client for the Album resource.
//!     pub struct AlbumClient;
//!
//!     fn create_album => "create" () with CreateAlbum;
//!     fn get_albums_by_admin => "byAdmin" (admin_id = "adminID");
//! }
//! ```
//!
//! expands to
//!
//! ```rust,ignore
//! impl<T: Transport> AlbumClient<T> {
//!     pub async fn create_album(&self, payload: &CreateAlbum) -> Result<Value, ClientError>;
//!     pub async fn get_albums_by_admin(&self, admin_id: impl Display) -> Result<Value, ClientError>;
//! }
//!
//! pub mod album_client_ops {
//!     pub const CREATE_ALBUM: &str = "create";
//!     pub const GET_ALBUMS_BY_ADMIN: &str = "byAdmin";
//! }
//! ```
//!
//! The method, path and payload placement of each operation come from the
//! [`ResourceDescriptor`](crate::framework::ResourceDescriptor) the client is
//! built with, so the same generated client serves any configured endpoint
//! convention.

/// Generates a typed client over [`ResourceClient`](crate::framework::ResourceClient).
#[macro_export]
macro_rules! resource_client {
    (@payload) => {
        ::std::option::Option::None
    };
    (@payload $payload:ident: $ty:ty) => {
        ::std::option::Option::Some(
            $crate::framework::__private::serde_json::to_value::<&$ty>($payload)?,
        )
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $client:ident;
        $(
            $(#[$fn_meta:meta])*
            fn $method:ident => $op:literal ( $($param:ident = $key:literal),* $(,)? ) $(with $payload:ty)?;
        )*
    ) => {
        $(#[$meta])*
        $vis struct $client<T: $crate::framework::Transport> {
            inner: $crate::framework::ResourceClient<T>,
        }

        impl<T: $crate::framework::Transport> ::std::clone::Clone for $client<T> {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }
        }

        impl<T: $crate::framework::Transport> $client<T> {
            pub fn new(inner: $crate::framework::ResourceClient<T>) -> Self {
                Self { inner }
            }

            /// Access the inner generic client.
            pub fn inner(&self) -> &$crate::framework::ResourceClient<T> {
                &self.inner
            }

            $(
                $(#[$fn_meta])*
                pub async fn $method(
                    &self,
                    $($param: impl ::std::fmt::Display,)*
                    $(payload: &$payload,)?
                ) -> ::std::result::Result<
                    $crate::framework::__private::serde_json::Value,
                    $crate::framework::ClientError,
                > {
                    $(let $param = $param.to_string();)*
                    let payload = $crate::resource_client!(@payload $(payload: $payload)?);
                    self.inner
                        .dispatch($op, &[$(($key, $param.as_str())),*], payload)
                        .await
                }
            )*
        }

        $crate::framework::__private::paste::paste! {
            #[doc = "Operation names dispatched by [`" $client "`]."]
            pub mod [<$client:snake _ops>] {
                $(pub const [<$method:upper>]: &str = $op;)*
            }
        }
    };
}
