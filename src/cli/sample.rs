//! Built-in sample text for the demo command.

/// Five paragraphs of Lorem ipsum
pub const SAMPLE_TEXT: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed auctor facilisis orci. Etiam at quam finibus, accumsan lacus sit amet, tempus dolor. Sed aliquam tempor scelerisque. Phasellus sollicitudin dignissim lorem eget sollicitudin. Pellentesque viverra nisi ut magna blandit vestibulum. Morbi eget semper sem. Maecenas ut ligula mauris. Cras at rutrum turpis, et pellentesque neque. Maecenas at dui urna. Maecenas vel nulla dolor. Fusce at laoreet risus.\n\
Aenean condimentum urna non tortor accumsan, vel pulvinar libero feugiat. Cras sit amet ex posuere, condimentum ex sit amet, dignissim quam. Lorem ipsum dolor sit amet, consectetur adipiscing elit. Praesent interdum sem in malesuada sollicitudin. Curabitur quis ligula lacus. Donec pellentesque vitae erat eget vestibulum. Ut et diam quam. Pellentesque faucibus volutpat ex. Mauris gravida tincidunt felis sit amet congue. Cras nibh velit, porttitor eget semper nec, porttitor vitae ex. In augue augue, rutrum a porta quis, venenatis non mi. Etiam ullamcorper posuere enim sagittis cursus.\n\
Ut vitae purus consectetur, commodo libero in, sagittis augue. Curabitur gravida lectus eget bibendum tincidunt. Vivamus accumsan elit non turpis varius, eget lacinia metus semper. In convallis iaculis commodo. Proin euismod diam eu pretium elementum. Maecenas odio elit, efficitur sed sagittis eu, elementum fermentum erat. Suspendisse gravida dignissim ipsum, sed faucibus neque. Vivamus tempor lacinia risus, pellentesque pulvinar nisi eleifend id. Pellentesque vel placerat sapien. Nullam mi turpis, hendrerit tristique ornare a, congue vel lectus. Etiam semper eu sapien sit amet vestibulum.\n\
Nulla elementum nisl augue, imperdiet rhoncus libero facilisis vel. Sed facilisis in sapien sed imperdiet. Suspendisse fringilla est porttitor est venenatis semper. Cras enim nulla, vestibulum ut eleifend eget, suscipit at nisi. Praesent et vestibulum orci, et vehicula urna. Nullam id justo odio. Nullam eu diam justo. In hac habitasse platea dictumst. Ut in neque eu arcu convallis ultrices nec eu nulla. Aenean sit amet odio vitae diam luctus malesuada ut sit amet tellus. Morbi posuere sollicitudin leo, quis tincidunt libero commodo ut. Quisque et arcu orci. Morbi sed erat sem. Suspendisse fringilla nulla vel bibendum hendrerit. Curabitur vehicula est sit amet turpis accumsan sodales. Vestibulum tortor lectus, finibus nec auctor nec, sodales id eros.\n\
Aenean non metus pellentesque, rutrum quam sed, pretium ex. In eget maximus ipsum. Praesent condimentum sagittis erat, vel tincidunt sem auctor id. Morbi at venenatis felis. Mauris luctus neque at tellus laoreet dignissim. Curabitur dignissim, nisl quis eleifend ultricies, lacus ante pellentesque leo, quis dapibus nulla ante at sapien. Cras in ex orci. Etiam sed volutpat ligula. Pellentesque viverra augue enim, sit amet finibus dui tempor non. Donec quis erat sed mauris blandit dictum vitae non nulla.";
