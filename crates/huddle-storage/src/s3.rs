#[cfg(feature = "s3")]
mod inner {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use aws_sdk_s3::Client;
    use aws_sdk_s3::operation::put_object::builders::PutObjectFluentBuilder;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_sdk_s3::types::ServerSideEncryption;

    use huddle_core::ObjectPayload;

    use crate::store::ObjectStore;

    /// AWS S3 and S3-compatible object store.
    ///
    /// Works with AWS S3, MinIO, Garage, Ceph RGW, and any other service
    /// implementing the S3 API.
    pub struct S3ObjectStore {
        client: Client,
    }

    /// Options for creating an S3 store from the environment.
    pub struct S3Options<'a> {
        pub region: Option<&'a str>,
        /// Custom endpoint URL (e.g. `http://localhost:9000` for MinIO).
        pub endpoint_url: Option<&'a str>,
        /// Force path-style addressing (`http://host/bucket/key` instead of
        /// `http://bucket.host/key`). Most S3-compatible servers require this.
        pub path_style: bool,
        /// Explicit access key. If None, uses env/profile credentials.
        pub access_key: Option<&'a str>,
        /// Explicit secret key. If None, uses env/profile credentials.
        pub secret_key: Option<&'a str>,
    }

    impl S3ObjectStore {
        /// Wrap a pre-configured client.
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }

        /// Create for standard AWS S3 using env/profile credentials.
        pub async fn new(region: Option<&str>) -> Self {
            Self::with_options(S3Options {
                region,
                endpoint_url: None,
                path_style: false,
                access_key: None,
                secret_key: None,
            })
            .await
        }

        /// Create with full options.
        pub async fn with_options(opts: S3Options<'_>) -> Self {
            let mut config_loader = aws_config::from_env();

            if let Some(r) = opts.region {
                config_loader = config_loader.region(aws_config::Region::new(r.to_string()));
            }

            // If explicit credentials are provided, inject them
            if let (Some(ak), Some(sk)) = (opts.access_key, opts.secret_key) {
                let creds =
                    aws_sdk_s3::config::Credentials::new(ak, sk, None, None, "huddle-config");
                config_loader = config_loader.credentials_provider(creds);
            }

            let sdk_config = config_loader.load().await;

            let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&sdk_config);

            if let Some(endpoint) = opts.endpoint_url {
                s3_config_builder = s3_config_builder.endpoint_url(endpoint);
            }

            if opts.path_style {
                s3_config_builder = s3_config_builder.force_path_style(true);
            }

            Self {
                client: Client::from_conf(s3_config_builder.build()),
            }
        }

        /// Build the put request. Every write requests AES256 server-side
        /// encryption; callers cannot omit or override it.
        fn put_request(
            &self,
            bucket: &str,
            key: &str,
            mime_type: &str,
            body: Vec<u8>,
        ) -> PutObjectFluentBuilder {
            self.client
                .put_object()
                .bucket(bucket)
                .key(key)
                .content_type(mime_type)
                .server_side_encryption(ServerSideEncryption::Aes256)
                .body(ByteStream::from(body))
        }
    }

    #[async_trait]
    impl ObjectStore for S3ObjectStore {
        async fn fetch_object(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectPayload> {
            tracing::debug!(bucket, key, "get object");
            let resp = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await?;
            let mime_type = resp
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let body = resp.body.collect().await?.to_vec();
            Ok(ObjectPayload { body, mime_type })
        }

        async fn fetch_metadata(
            &self,
            bucket: &str,
            key: &str,
        ) -> anyhow::Result<HashMap<String, String>> {
            tracing::debug!(bucket, key, "head object");
            let resp = self
                .client
                .head_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await?;
            Ok(resp.metadata().cloned().unwrap_or_default())
        }

        async fn store_object(
            &self,
            bucket: &str,
            key: &str,
            mime_type: &str,
            body: &[u8],
        ) -> anyhow::Result<()> {
            tracing::debug!(bucket, key, mime_type, len = body.len(), "put object");
            self.put_request(bucket, key, mime_type, body.to_vec())
                .send()
                .await?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use aws_sdk_s3::config::BehaviorVersion;

        fn offline_store() -> S3ObjectStore {
            let conf = aws_sdk_s3::Config::builder()
                .behavior_version(BehaviorVersion::latest())
                .build();
            S3ObjectStore::from_client(Client::from_conf(conf))
        }

        #[test]
        fn put_request_always_encrypts() {
            let store = offline_store();
            let req = store.put_request(
                "standup-audio",
                "audio/standups/abc123/01-02-2024/user42/rec789.webm",
                "audio/webm",
                vec![1, 2, 3],
            );
            assert_eq!(
                req.get_server_side_encryption(),
                &Some(ServerSideEncryption::Aes256)
            );
            assert_eq!(req.get_content_type().as_deref(), Some("audio/webm"));
            assert_eq!(req.get_bucket().as_deref(), Some("standup-audio"));
        }
    }
}

#[cfg(feature = "s3")]
pub use inner::{S3ObjectStore, S3Options};
