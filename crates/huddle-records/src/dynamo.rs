//! DynamoDB recording store.
//!
//! One item per recording under the composite key
//! `pk = standup#{standupId}`,
//! `sk = update#{dateKey}#user#{userId}#recording#{recordingId}`.

#[cfg(feature = "dynamodb")]
mod inner {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use aws_sdk_dynamodb::Client;
    use aws_sdk_dynamodb::types::AttributeValue;

    use huddle_core::{RecordingKey, RecordingStatus};

    use crate::store::RecordingStore;

    /// `#status` aliases the attribute name: `status` is a DynamoDB
    /// reserved word.
    const COMPLETED_UPDATE_EXPRESSION: &str =
        "SET updatedAt = :updatedAt, #status = :status, transcodedFileKey = :transcodedFileKey";

    /// Full item for a freshly created record. `createdAt` and `updatedAt`
    /// share the single captured timestamp; `name` is only written when the
    /// upload metadata carried one.
    fn record_item(
        key: &RecordingKey,
        name: Option<&str>,
        now: &str,
    ) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert("pk".to_string(), AttributeValue::S(key.pk()));
        item.insert("sk".to_string(), AttributeValue::S(key.sk()));
        item.insert(
            "recordingId".to_string(),
            AttributeValue::S(key.recording_id.clone()),
        );
        item.insert(
            "standupId".to_string(),
            AttributeValue::S(key.standup_id.clone()),
        );
        item.insert("userId".to_string(), AttributeValue::S(key.user_id.clone()));
        if let Some(name) = name {
            item.insert("name".to_string(), AttributeValue::S(name.to_string()));
        }
        item.insert("createdAt".to_string(), AttributeValue::S(now.to_string()));
        item.insert("updatedAt".to_string(), AttributeValue::S(now.to_string()));
        item.insert(
            "status".to_string(),
            AttributeValue::S(RecordingStatus::Transcoding.to_string()),
        );
        item.insert(
            "transcodedFileKey".to_string(),
            AttributeValue::S(String::new()),
        );
        item
    }

    /// DynamoDB-backed recording store.
    pub struct DynamoRecordingStore {
        client: Client,
        table_name: String,
    }

    impl DynamoRecordingStore {
        /// Wrap a pre-configured client.
        pub fn from_client(client: Client, table_name: &str) -> Self {
            Self {
                client,
                table_name: table_name.to_string(),
            }
        }

        /// Create from env/profile credentials, optionally against a custom
        /// endpoint (e.g. DynamoDB Local).
        pub async fn new(
            table_name: &str,
            region: Option<&str>,
            endpoint_url: Option<&str>,
        ) -> Self {
            let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

            if let Some(region) = region {
                builder = builder.region(aws_config::Region::new(region.to_string()));
            }

            if let Some(endpoint_url) = endpoint_url {
                builder = builder.endpoint_url(endpoint_url);
            }

            let cfg = builder.load().await;
            Self {
                client: Client::new(&cfg),
                table_name: table_name.to_string(),
            }
        }
    }

    #[async_trait]
    impl RecordingStore for DynamoRecordingStore {
        async fn create_record(
            &self,
            s3_key: &str,
            metadata: &HashMap<String, String>,
        ) -> anyhow::Result<()> {
            let key = RecordingKey::parse(s3_key)?;
            let now = chrono::Utc::now().to_rfc3339();
            let item = record_item(&key, metadata.get("name").map(String::as_str), &now);

            tracing::debug!(
                table = %self.table_name,
                pk = %key.pk(),
                sk = %key.sk(),
                "put recording record"
            );

            // unconditional put: an existing record at this key is replaced
            self.client
                .put_item()
                .table_name(&self.table_name)
                .set_item(Some(item))
                .send()
                .await?;

            Ok(())
        }

        async fn mark_completed(&self, s3_key: &str) -> anyhow::Result<()> {
            let key = RecordingKey::parse(s3_key)?;
            let now = chrono::Utc::now().to_rfc3339();

            tracing::debug!(
                table = %self.table_name,
                pk = %key.pk(),
                sk = %key.sk(),
                "mark recording completed"
            );

            self.client
                .update_item()
                .table_name(&self.table_name)
                .key("pk", AttributeValue::S(key.pk()))
                .key("sk", AttributeValue::S(key.sk()))
                .update_expression(COMPLETED_UPDATE_EXPRESSION)
                .expression_attribute_names("#status", "status")
                .expression_attribute_values(":updatedAt", AttributeValue::S(now))
                .expression_attribute_values(
                    ":status",
                    AttributeValue::S(RecordingStatus::Completed.to_string()),
                )
                .expression_attribute_values(
                    ":transcodedFileKey",
                    AttributeValue::S(s3_key.to_string()),
                )
                .send()
                .await?;

            Ok(())
        }
    }

}

#[cfg(feature = "dynamodb")]
pub use inner::DynamoRecordingStore;
