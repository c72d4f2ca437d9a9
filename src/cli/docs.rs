//! Help content for the jg CLI

/// One-line description
pub const ABOUT: &str = "jg - a CLI tool to generate JSON";

/// Long help: examples and syntax guide
pub const HELP: &str = r#"EXAMPLES

  $ jg name=foo
  {"name":"foo"}

  $ jg id=:32
  {"id":32}

  $ jg name=foo id=:32
  {"id":32,"name":"foo"}

  $ jg foo.bar=hello
  {"foo":{"bar":"hello"}}

  $ jg parent.child1=v1 parent.child2=v2
  {"parent":{"child1":"v1","child2":"v2"}}

  $ jg 'parent={child1=v1 child2=v2}'
  {"parent":{"child1":"v1","child2":"v2"}}

  $ jg '[foo bar]'
  ["foo","bar"]

  $ jg '[:1 :2 :3]'
  [1,2,3]

  $ jg '[ foo=:true bar=:false ]'
  [{"foo":true},{"bar":false}]

  $ jg '[ {foo=a yes=:true} {bar=b yes=:false} ]'
  [{"foo":"a","yes":true},{"bar":"b","yes":false}]

  $ jg -s id=:7 -s name=bob 'user={id=$id name=$name}'
  {"user":{"id":7,"name":"bob"}}

  $ jg '{a=1}' '{b=2}'
  {"a":"1"}
  {"b":"2"}

GENERATOR SYNTAX

  Field

    field=value

  A field name containing dots is a path: intermediary objects are created
  and repeated paths merge into the same object. Enclose a name in double
  quotes to disable that.

  Values are literals, variables, object generators or array generators.
  Literals are strings. Prefix a literal with ':' for it to be read as a
  number, a boolean or null. Multi-word literals must be enclosed in double
  quotes, and \" inserts a quote inside them.

  Variable

    field=$name

  Replaced by the value given with `-s name=VALUE`, or null when unset.
  VALUE is a literal or a ':'-prefixed raw literal.

  Object

    field={ GENERATOR... }

  Creates a JSON object from the field generators inside the braces.

  Array

    field=[ GENERATOR... ]

  Creates a JSON array. The accepted elements are:

    - literal, raw literal or variable: added as is
    - field generator: adds an object containing the generated field
    - object generator: adds the generated object
    - array generator: adds the generated array

  Top level

  If the expressions start with '{' or '[', every bracketed group produces
  its own JSON document, printed one per line. Otherwise all fields build a
  single object.
"#;
