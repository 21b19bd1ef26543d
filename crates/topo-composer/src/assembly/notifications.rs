//! Alarm topic and its human subscription

use super::{ids, AssemblyContext};
use topo_types::{
    ResourceDescriptor, ResourceKind, SubscriptionProtocol, SubscriptionSpec, TopicSpec,
};

pub fn alarm_topic(ctx: &AssemblyContext<'_>) -> ResourceDescriptor {
    ResourceDescriptor::new(
        ids::TOPIC,
        ResourceKind::Topic(TopicSpec {
            topic_name: ctx.names.alarm_topic.clone(),
        }),
    )
    .named(&ctx.names.alarm_topic)
}

pub fn alarm_subscription(ctx: &AssemblyContext<'_>) -> ResourceDescriptor {
    let endpoint = &ctx.descriptor.notification_endpoint;
    ResourceDescriptor::new(
        ids::TOPIC_SUBSCRIPTION,
        ResourceKind::TopicSubscription(SubscriptionSpec {
            topic: ids::TOPIC.to_string(),
            protocol: SubscriptionProtocol::for_endpoint(endpoint),
            endpoint: endpoint.clone(),
        }),
    )
    .depends_on(ids::TOPIC)
}
